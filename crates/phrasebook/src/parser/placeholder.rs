//! Placeholder scanner for phrase text.
//!
//! A placeholder is `{` + up to two ASCII digits + an optional `:spec` + `}`.
//! Anything else between braces is literal text. The scanner is shared by the
//! catalog parser (to build slots) and the formatter (to substitute them).

use std::ops::Range;

use winnow::combinator::{delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::FormatSlot;

/// One placeholder occurrence inside a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole `{...}` token.
    pub span: Range<usize>,
    /// Parsed index, `None` when the digits are missing (`{}` or `{:t}`).
    pub index: Option<usize>,
    /// Text after the colon, empty when there is none.
    pub spec: &'a str,
}

/// Find every well-formed placeholder in `phrase`, left to right.
///
/// Matches never overlap. A `{` that does not start a placeholder is skipped
/// and scanning resumes right after it.
pub fn scan_placeholders(phrase: &str) -> Vec<Placeholder<'_>> {
    let mut found = Vec::new();
    let mut offset = 0;
    while let Some(relative) = phrase[offset..].find('{') {
        let start = offset + relative;
        let mut input = &phrase[start..];
        if let Ok((digits, spec)) = placeholder(&mut input) {
            let end = phrase.len() - input.len();
            found.push(Placeholder {
                span: start..end,
                index: digits.parse().ok(),
                spec: spec.unwrap_or_default(),
            });
            offset = end;
        } else {
            offset = start + 1;
        }
    }
    found
}

/// Build the slot table for a phrase.
///
/// The table is sized by the highest index; a repeated index keeps the spec of
/// its last occurrence. Returns the offending placeholder if one has no index.
pub(crate) fn collect_slots(phrase: &str) -> Result<Vec<Option<FormatSlot>>, Placeholder<'_>> {
    let mut slots: Vec<Option<FormatSlot>> = Vec::new();
    for found in scan_placeholders(phrase) {
        let Some(index) = found.index else {
            return Err(found);
        };
        if slots.len() <= index {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(FormatSlot::new(found.spec));
    }
    Ok(slots)
}

/// Parse a single placeholder: { digits? (:spec)? }
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    delimited(
        '{',
        (
            take_while(0..=2, |c: char| c.is_ascii_digit()),
            opt(preceded(':', take_while(1.., is_spec_char))),
        ),
        '}',
    )
    .parse_next(input)
}

/// Characters allowed in a slot spec: category names and the `t` flag.
fn is_spec_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digit_index_is_literal() {
        assert!(scan_placeholders("{123}").is_empty());
    }

    #[test]
    fn unmatched_brace_resumes_after_it() {
        let found = scan_placeholders("{{0}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 1..4);
        assert_eq!(found[0].index, Some(0));
    }

    #[test]
    fn missing_index_is_reported() {
        let err = collect_slots("a {:t} b").unwrap_err();
        assert_eq!(err.span, 2..6);
        assert_eq!(err.spec, "t");
    }
}
