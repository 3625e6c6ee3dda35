//! Phrase catalog parser.
//!
//! A catalog is a `"Phrases" { ... }` wrapper holding category blocks:
//!
//! ```text
//! "Phrases"
//! {
//!     "greet"
//!     {
//!         "en" "Hello {0:t}!"
//!         "de" "Hallo {0:t}!"
//!     }
//! }
//! ```
//!
//! The body is read line by line. Only the phrase line matching the requested
//! language is kept; the others are checked for shape and dropped.

use winnow::ascii::{Caseless, multispace0, space1};
use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::{literal, rest, take_till, take_while};

use super::error::ParseError;
use super::placeholder::collect_slots;
use crate::types::{Category, CategoryTable};

/// Parse a catalog into a fresh table for `language`.
pub fn parse_catalog(input: &str, language: &str) -> Result<CategoryTable, ParseError> {
    let mut table = CategoryTable::new();
    parse_catalog_into(input, language, &mut table)?;
    Ok(table)
}

/// Parse a catalog and merge its categories into `table`.
///
/// Categories already in `table` win over ones from `input`. Each category is
/// inserted as soon as its block closes, so on error the blocks before the
/// failing one remain in `table`.
///
/// Returns the number of categories that were added.
pub fn parse_catalog_into(
    input: &str,
    language: &str,
    table: &mut CategoryTable,
) -> Result<usize, ParseError> {
    let Some((body_start, body)) = catalog_body(input)? else {
        return Ok(0);
    };

    let mut lines = body_lines(input, body_start, body).into_iter();
    let unterminated = |name: &str| {
        let (line, column) = calculate_position(input, body_start + body.len());
        ParseError::UnexpectedEof {
            line,
            column,
            category: name.to_string(),
        }
    };

    let mut inserted = 0;
    while let Some(header) = lines.next() {
        let name = category_header(&header)?;

        let open = lines.next().ok_or_else(|| unterminated(name))?;
        if !open.text.starts_with('{') {
            return Err(open.error(format!("expected '{{' to open category \"{name}\"")));
        }

        let mut category = Category::empty();
        loop {
            let line = lines.next().ok_or_else(|| unterminated(name))?;
            if line.text.starts_with('}') {
                break;
            }
            let (code, phrase) = phrase_line(&line)?;
            if code == language {
                let slots = collect_slots(phrase).map_err(|bad| {
                    let token = &phrase[bad.span.clone()];
                    let phrase_start = line.text.len() - phrase.len() - 1;
                    let column = line.column
                        + line.text[..phrase_start].chars().count()
                        + phrase[..bad.span.start].chars().count();
                    ParseError::Syntax {
                        line: line.line,
                        column,
                        message: format!("invalid placeholder index in '{token}'"),
                    }
                })?;
                category = Category::new(phrase, slots);
            }
        }

        if table.insert(name, category) {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// A trimmed, non-blank line of the catalog body.
#[derive(Debug)]
struct Line<'a> {
    text: &'a str,
    line: usize,
    column: usize,
}

impl Line<'_> {
    fn error(&self, message: String) -> ParseError {
        ParseError::Syntax {
            line: self.line,
            column: self.column,
            message,
        }
    }
}

/// Locate the body between the `"Phrases" {` header and the final `}`.
///
/// Returns `None` for an empty file, otherwise the byte offset of the body in
/// `input` and the body itself.
fn catalog_body(input: &str) -> Result<Option<(usize, &str)>, ParseError> {
    let trimmed_start = input.trim_start_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
    let start = input.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || {
        let (line, column) = calculate_position(input, start);
        ParseError::Syntax {
            line,
            column,
            message: "invalid phrase file format: expected \"Phrases\" { ... }".to_string(),
        }
    };

    let mut remaining = trimmed;
    catalog_header(&mut remaining).map_err(|_| invalid())?;
    let body = remaining.strip_suffix('}').ok_or_else(invalid)?;
    let body_start = start + (trimmed.len() - remaining.len());
    Ok(Some((body_start, body)))
}

/// Parse the catalog header: "Phrases" {
fn catalog_header(input: &mut &str) -> ModalResult<()> {
    ('"', literal(Caseless("phrases")), '"', multispace0, '{')
        .void()
        .parse_next(input)
}

/// Split the body into non-blank lines, keeping their positions in `input`.
fn body_lines<'a>(input: &str, body_start: usize, body: &'a str) -> Vec<Line<'a>> {
    let (mut line, first_column) = calculate_position(input, body_start);
    let mut lines = Vec::new();
    for (i, raw) in body.split('\n').enumerate() {
        let text = raw.trim();
        if !text.is_empty() {
            let lead = raw.len() - raw.trim_start().len();
            let base = if i == 0 { first_column } else { 1 };
            lines.push(Line {
                text,
                line,
                column: base + raw[..lead].chars().count(),
            });
        }
        line += 1;
    }
    lines
}

/// Parse a category header line: "name"
fn category_header<'a>(line: &Line<'a>) -> Result<&'a str, ParseError> {
    let mut input = line.text;
    let name = quoted(&mut input)
        .ok()
        .filter(|_| input.is_empty())
        .ok_or_else(|| line.error(format!("expected quoted category name, found '{}'", line.text)))?;
    Ok(name)
}

/// Parse a phrase line: "lang" "phrase text"
///
/// The phrase runs to the last quote on the line and may itself contain quotes.
fn phrase_line<'a>(line: &Line<'a>) -> Result<(&'a str, &'a str), ParseError> {
    let mut input = line.text;
    let parsed: ModalResult<(&str, &str)> = (
        delimited('"', take_while(1.., is_language_char), '"'),
        space1,
        '"',
        rest,
    )
        .map(|(code, _, _, tail)| (code, tail))
        .parse_next(&mut input);

    parsed
        .ok()
        .and_then(|(code, tail)| tail.strip_suffix('"').map(|phrase| (code, phrase)))
        .ok_or_else(|| {
            line.error(format!(
                "expected \"<language>\" \"<phrase>\", found '{}'",
                line.text
            ))
        })
}

/// Parse a quoted token without inner quotes.
fn quoted<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('"', take_till(1.., '"'), '"').parse_next(input)
}

/// Characters allowed in a language code (e.g. `en`, `pt-BR`, `#id`).
fn is_language_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '#')
}

/// Calculate 1-based line and column for a byte offset in `original`.
fn calculate_position(original: &str, offset: usize) -> (usize, usize) {
    let consumed_str = &original[..offset];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_lines_and_columns() {
        assert_eq!(calculate_position("ab\ncd", 0), (1, 1));
        assert_eq!(calculate_position("ab\ncd", 4), (2, 2));
    }

    #[test]
    fn body_lines_skip_blanks() {
        let input = "\"Phrases\" {\n\n   \"a\"\r\n}";
        let (start, body) = catalog_body(input).unwrap().unwrap();
        let lines = body_lines(input, start, body);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "\"a\"");
        assert_eq!((lines[0].line, lines[0].column), (3, 4));
    }

    #[test]
    fn header_is_case_insensitive() {
        assert!(catalog_body("\"PHRASES\" {}").unwrap().is_some());
        assert!(catalog_body("\"phrases\"{}").unwrap().is_some());
    }
}
