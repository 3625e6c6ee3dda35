//! Integration tests for template evaluation.

use phrasebook::{CategoryTable, FormatContext, Value, args, format, format_template, parse_catalog};

const CATALOG: &str = r#"
"Phrases"
{
    "greet"
    {
        "en" "Hello {0:t}!"
    }
    "world"
    {
        "en" "World"
    }
    "welcome"
    {
        "en" "Welcome, {0}! You have {1} messages."
    }
    "swap"
    {
        "en" "{1} before {0}"
    }
    "title"
    {
        "en" "The {0:noun.ship}"
    }
    "noun.ship"
    {
        "en" "Ship"
    }
    "sentence"
    {
        "en" "{0:t} says {1}"
    }
    "deep"
    {
        "en" "[{0:sentence}]"
    }
    "empty"
    {
        "de" "Nur Deutsch"
    }
    "pair"
    {
        "en" "{0} and {0}"
    }
    "list"
    {
        "en" "{0}, {1:t}"
    }
    "end"
    {
        "en" "{0}"
    }
    "percent"
    {
        "en" "100%s"
    }
    "count"
    {
        "en" "Count: {01} and {0}"
    }
    "level"
    {
        "en" "Level {05}"
    }
}
"#;

fn table() -> CategoryTable {
    parse_catalog(CATALOG, "en").unwrap()
}

// =========================================================================
// Directives
// =========================================================================

#[test]
fn eval_template_without_markers_is_unchanged() {
    let text = format("no markers {0} here", &table(), &[]).unwrap();
    assert_eq!(text, "no markers {0} here");
}

#[test]
fn eval_empty_template() {
    assert_eq!(format("", &table(), &args![1]).unwrap(), "");
}

#[test]
fn eval_literal_marker_consumes_nothing() {
    let args: Vec<Value> = args![];
    let mut ctx = FormatContext::new(&args);
    let text = format_template("100%%", &table(), &mut ctx).unwrap();
    assert_eq!(text, "100%");
    assert_eq!(ctx.consumed(), 0);
}

#[test]
fn eval_argument_directive_aliases() {
    let text = format("%s/%S/%n/%N", &table(), &args![1, "b", 2.5, true]).unwrap();
    assert_eq!(text, "1/b/2.5/true");
}

#[test]
fn eval_directives_between_text() {
    let text = format("a%sb%sc", &table(), &args![1, 2]).unwrap();
    assert_eq!(text, "a1b2c");
}

#[test]
fn eval_unicode_around_directives() {
    let text = format("ü%sé", &table(), &args!["ß"]).unwrap();
    assert_eq!(text, "üßé");
}

#[test]
fn eval_extra_arguments_are_ignored() {
    let args = args![1, 2];
    let mut ctx = FormatContext::new(&args);
    assert_eq!(format_template("%s", &table(), &mut ctx).unwrap(), "1");
    assert_eq!(ctx.remaining(), 1);
}

#[test]
fn eval_translation_directive() {
    assert_eq!(format("%t", &table(), &args!["world"]).unwrap(), "World");
    assert_eq!(format("%T", &table(), &args!["world"]).unwrap(), "World");
}

#[test]
fn eval_translation_key_from_number() {
    let table = parse_catalog(
        r#""Phrases"
{
    "404"
    {
        "en" "Not Found"
    }
}"#,
        "en",
    )
    .unwrap();
    assert_eq!(format("%t", &table, &args![404]).unwrap(), "Not Found");
}

#[test]
fn eval_phrase_text_is_not_rescanned_for_markers() {
    assert_eq!(format("%t", &table(), &args!["percent"]).unwrap(), "100%s");
}

#[test]
fn eval_missing_language_gives_empty_text() {
    assert_eq!(format("<%t>", &table(), &args!["empty"]).unwrap(), "<>");
}

// =========================================================================
// Nested slots
// =========================================================================

#[test]
fn eval_nested_translation_consumes_in_order() {
    let args = args!["greet", "world"];
    let mut ctx = FormatContext::new(&args);
    let text = format_template("%t", &table(), &mut ctx).unwrap();
    assert_eq!(text, "Hello World!");
    assert_eq!(ctx.consumed(), 2);
}

#[test]
fn eval_positional_slots() {
    let text = format("%t", &table(), &args!["welcome", "Ada", 3]).unwrap();
    assert_eq!(text, "Welcome, Ada! You have 3 messages.");
}

#[test]
fn eval_slots_resolve_in_index_order() {
    let text = format("%t", &table(), &args!["swap", "a", "b"]).unwrap();
    assert_eq!(text, "b before a");
}

#[test]
fn eval_repeated_placeholder_uses_one_argument() {
    let args = args!["pair", "x", "unused"];
    let mut ctx = FormatContext::new(&args);
    assert_eq!(format_template("%t", &table(), &mut ctx).unwrap(), "x and x");
    assert_eq!(ctx.consumed(), 2);
}

#[test]
fn eval_literal_category_reference_consumes_no_argument() {
    let args = args!["title"];
    let mut ctx = FormatContext::new(&args);
    assert_eq!(format_template("%t", &table(), &mut ctx).unwrap(), "The Ship");
    assert_eq!(ctx.consumed(), 1);
}

#[test]
fn eval_index_with_leading_zero_is_substituted() {
    let args = args!["count", "A", "B"];
    let mut ctx = FormatContext::new(&args);
    let text = format_template("%t", &table(), &mut ctx).unwrap();
    assert_eq!(text, "Count: B and A");
    assert_eq!(ctx.consumed(), 3);

    let args = args!["level", 7, "unused"];
    let mut ctx = FormatContext::new(&args);
    assert_eq!(format_template("%t", &table(), &mut ctx).unwrap(), "Level 7");
    assert_eq!(ctx.consumed(), 2);
}

#[test]
fn eval_deeply_nested_slots() {
    let text = format("%t", &table(), &args!["deep", "greet", "world", "Bob"]).unwrap();
    assert_eq!(text, "[Hello World! says Bob]");
}

#[test]
fn eval_arguments_shared_between_template_and_phrases() {
    let text = format("%t, %s", &table(), &args!["greet", "world", "tail"]).unwrap();
    assert_eq!(text, "Hello World!, tail");
}

#[test]
fn eval_same_category_may_recurse_through_arguments() {
    let text = format("%t", &table(), &args!["list", "a", "list", "b", "end", "c"]).unwrap();
    assert_eq!(text, "a, b, c");
}

#[test]
fn eval_substituted_text_is_not_rescanned() {
    let text = format("%t", &table(), &args!["swap", "{1}", "b"]).unwrap();
    assert_eq!(text, "b before {1}");
}

#[test]
fn eval_is_deterministic() {
    let table = table();
    let args = args!["deep", "greet", "world", "Bob"];
    let first = format("%t (%s)", &table, &[args.clone(), args![1]].concat()).unwrap();
    let second = format("%t (%s)", &table, &[args, args![1]].concat()).unwrap();
    assert_eq!(first, second);
}
