//! Miette diagnostic wrapper for catalog parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use phrasebook::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for catalog parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(phrasebook::syntax))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position().unwrap_or((1, 1));
        let help = match err {
            ParseError::UnexpectedEof { category, .. } => {
                Some(format!("add a closing '}}' for category \"{category}\""))
            }
            ParseError::Syntax { .. } | ParseError::InvalidUtf8 => None,
        };

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message: err.message(),
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset.
///
/// The result is clamped to the content length so miette never gets an
/// out-of-bounds span.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split('\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let line_start = line_start.min(content.len());
    let within: usize = content[line_start..]
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    (line_start + within).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_characters_within_line() {
        let content = "ab\nü x\n";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 1), 3);
        assert_eq!(byte_offset(content, 2, 3), 6);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(byte_offset("ab", 9, 9), 2);
    }
}
