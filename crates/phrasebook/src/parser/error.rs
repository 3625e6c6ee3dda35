//! Parse error types for phrase catalogs.

use thiserror::Error;

/// An error that occurred while parsing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The catalog body ended inside a category block.
    #[error("unexpected end of input at {line}:{column}: unterminated category \"{category}\"")]
    UnexpectedEof {
        line: usize,
        column: usize,
        category: String,
    },

    /// Invalid UTF-8 in input.
    #[error("invalid UTF-8 in input")]
    InvalidUtf8,
}

impl ParseError {
    /// 1-based line and column of the error, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column, .. } => Some((*line, *column)),
            ParseError::InvalidUtf8 => None,
        }
    }

    /// The error description without its location prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::UnexpectedEof { category, .. } => {
                format!("unterminated category \"{category}\"")
            }
            ParseError::InvalidUtf8 => "invalid UTF-8".to_string(),
        }
    }
}
