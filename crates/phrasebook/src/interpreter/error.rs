//! Error types for loading catalogs and formatting templates.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file does not exist.
    #[error("catalog not found: '{path}'")]
    NotFound { path: PathBuf },

    /// File I/O error when reading the catalog.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl LoadError {
    /// Attach a file path to a parse error.
    pub fn from_parse(path: &Path, err: &ParseError) -> Self {
        let (line, column) = err.position().unwrap_or((0, 0));
        LoadError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            message: err.message(),
        }
    }
}

/// An error that occurred while formatting a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A directive or slot needed an argument but the list was exhausted.
    #[error("argument {index} out of range: {available} argument(s) supplied")]
    ArgumentOutOfRange { index: usize, available: usize },

    /// Category not found in the table.
    #[error("category not found: '{key}'{}", format_suggestions(suggestions))]
    KeyNotFound {
        key: String,
        suggestions: Vec<String>,
    },

    /// Unknown character after the `%` marker.
    #[error("invalid directive '%{directive}' at byte {position}")]
    InvalidDirective { directive: char, position: usize },

    /// The template ends with a lone `%`.
    #[error("dangling '%' at byte {position}")]
    DanglingMarker { position: usize },

    /// A slot spec that is neither empty, `t`, nor a category name.
    #[error("invalid slot '{slot}' in category '{category}'")]
    InvalidSlot { category: String, slot: String },

    /// A category expands into itself without consuming any argument.
    #[error("cyclic reference detected: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// Maximum recursion depth exceeded.
    #[error("maximum recursion depth exceeded")]
    MaxDepthExceeded,
}

/// Render the "did you mean" tail of a [`EvalError::KeyNotFound`] message.
fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Find up to three names close to `key` by edit distance, closest first.
///
/// Keys of three characters or fewer allow a distance of 1, longer keys 2.
pub fn compute_suggestions<'a>(key: &str, available: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .map(|name| (strsim::levenshtein(key, name), name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}
