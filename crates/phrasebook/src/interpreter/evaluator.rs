//! Template evaluation engine.
//!
//! A template is plain text with `%` directives:
//!
//! | Directive          | Effect                                            |
//! |--------------------|---------------------------------------------------|
//! | `%t` `%T`          | next argument is a category name; insert its phrase |
//! | `%s` `%S` `%n` `%N`| insert the next argument                          |
//! | `%%`               | insert a literal `%`                              |
//!
//! A looked-up phrase may contain `{i}`, `{i:t}` and `{i:other.key}` slots,
//! which are filled from the same argument list before the phrase is inserted.

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::{EvalError, FormatContext};
use crate::parser::scan_placeholders;
use crate::types::{Category, CategoryTable, FormatSlot, SlotKind, Value};

/// The character that starts a directive.
pub const MARKER: char = '%';

/// Format `template` against `table`, consuming `args` left to right.
///
/// # Example
///
/// ```
/// use phrasebook::{args, format, parse_catalog};
///
/// let table = parse_catalog(r#""Phrases"
/// {
///     "greet"
///     {
///         "en" "Hello {0:t}!"
///     }
///     "world"
///     {
///         "en" "World"
///     }
/// }"#, "en").unwrap();
///
/// let text = format("%t (%n%%)", &table, &args!["greet", "world", 100]).unwrap();
/// assert_eq!(text, "Hello World! (100%)");
/// ```
pub fn format(template: &str, table: &CategoryTable, args: &[Value]) -> Result<String, EvalError> {
    let mut ctx = FormatContext::new(args);
    format_template(template, table, &mut ctx)
}

/// Format a template with an existing context.
///
/// The context's argument cursor is left after the last consumed argument.
///
/// # Errors
///
/// Returns an error if:
/// - A directive or slot needs an argument and none is left
/// - A category is not in the table
/// - A directive character is unknown, or the template ends with `%`
/// - A slot spec is invalid, or expansion cycles or nests too deeply
pub fn format_template(
    template: &str,
    table: &CategoryTable,
    ctx: &mut FormatContext<'_>,
) -> Result<String, EvalError> {
    let mut output = String::with_capacity(template.len());
    let mut start = 0;
    while let Some(relative) = template[start..].find(MARKER) {
        let position = start + relative;
        output.push_str(&template[start..position]);

        let directive = template[position + MARKER.len_utf8()..]
            .chars()
            .next()
            .ok_or(EvalError::DanglingMarker { position })?;
        match directive {
            't' | 'T' => {
                let key = ctx.next_arg()?.to_string();
                output.push_str(&resolve_category(&key, table, ctx)?);
            }
            's' | 'S' | 'n' | 'N' => {
                output.push_str(&ctx.next_arg()?.to_string());
            }
            MARKER => output.push(MARKER),
            other => {
                return Err(EvalError::InvalidDirective {
                    directive: other,
                    position,
                });
            }
        }

        start = position + MARKER.len_utf8() + directive.len_utf8();
    }
    output.push_str(&template[start..]);
    Ok(output)
}

/// Look up a category and expand its slots.
fn resolve_category(
    key: &str,
    table: &CategoryTable,
    ctx: &mut FormatContext<'_>,
) -> Result<String, EvalError> {
    let category = table.get(key).ok_or_else(|| EvalError::KeyNotFound {
        key: key.to_string(),
        suggestions: compute_suggestions(key, table.names()),
    })?;

    if !category.has_slots() {
        return Ok(category.phrase.clone());
    }

    ctx.push_call(key)?;
    let text = expand_slots(key, category, table, ctx);
    ctx.pop_call();
    text
}

/// Resolve every slot in index order, then substitute them into the phrase.
fn expand_slots(
    name: &str,
    category: &Category,
    table: &CategoryTable,
    ctx: &mut FormatContext<'_>,
) -> Result<String, EvalError> {
    let mut values = Vec::with_capacity(category.slots.len());
    for (index, slot) in category.slots.iter().enumerate() {
        let value = match slot {
            Some(slot) => Some(resolve_slot(name, index, slot, table, ctx)?),
            None => None,
        };
        values.push(value);
    }
    Ok(substitute(&category.phrase, &category.slots, &values))
}

fn resolve_slot(
    name: &str,
    index: usize,
    slot: &FormatSlot,
    table: &CategoryTable,
    ctx: &mut FormatContext<'_>,
) -> Result<String, EvalError> {
    match slot.kind() {
        SlotKind::Argument => Ok(ctx.next_arg()?.to_string()),
        SlotKind::Translate => {
            let key = ctx.next_arg()?.to_string();
            resolve_category(&key, table, ctx)
        }
        SlotKind::Category(key) => resolve_category(key, table, ctx),
        SlotKind::Invalid(_) => Err(EvalError::InvalidSlot {
            category: name.to_string(),
            slot: slot.placeholder(index),
        }),
    }
}

/// Replace each placeholder whose index and spec match its slot.
///
/// The index is compared as a number, so `{01}` fills slot 1. Substituted
/// text is copied as-is and never scanned again.
fn substitute(phrase: &str, slots: &[Option<FormatSlot>], values: &[Option<String>]) -> String {
    let mut output = String::with_capacity(phrase.len());
    let mut last = 0;
    for found in scan_placeholders(phrase) {
        let Some(index) = found.index else {
            continue;
        };
        let (Some(Some(slot)), Some(Some(value))) = (slots.get(index), values.get(index)) else {
            continue;
        };
        if found.spec != slot.raw {
            continue;
        }
        output.push_str(&phrase[last..found.span.start]);
        output.push_str(value);
        last = found.span.end;
    }
    output.push_str(&phrase[last..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_skips_stale_specs() {
        let slots = vec![Some(FormatSlot::new("t"))];
        let values = vec![Some("X".to_string())];
        assert_eq!(substitute("{0} {0:t} {0:t}", &slots, &values), "{0} X X");
    }

    #[test]
    fn substitute_does_not_rescan_values() {
        let slots = vec![Some(FormatSlot::argument()), Some(FormatSlot::argument())];
        let values = vec![Some("{1}".to_string()), Some("b".to_string())];
        assert_eq!(substitute("{0}-{1}", &slots, &values), "{1}-b");
    }

    #[test]
    fn substitute_matches_index_with_leading_zero() {
        let slots = vec![Some(FormatSlot::argument()), Some(FormatSlot::argument())];
        let values = vec![Some("a".to_string()), Some("b".to_string())];
        assert_eq!(substitute("{01} {00} {1}", &slots, &values), "b a b");
    }
}
