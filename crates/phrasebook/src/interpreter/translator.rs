//! Catalog loading and formatting for one active language.
//!
//! The Translator struct provides the user-facing API: it owns the category
//! table, the active language and the directory catalogs are loaded from.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, warn};

use crate::interpreter::context::DEFAULT_MAX_DEPTH;
use crate::interpreter::error::LoadError;
use crate::interpreter::{EvalError, FormatContext, format_template};
use crate::parser::{ParseError, parse_catalog_into};
use crate::types::{CategoryTable, Value};

/// Extension appended to catalog names that have none.
pub const DEFAULT_EXTENSION: &str = ".phrases";

/// User-facing translator over `.phrases` catalogs.
///
/// The translator holds categories for exactly one language. Loading is
/// additive: every `load` merges one catalog into the table, and a category
/// name that is already present keeps its first definition. Switching the
/// language with [`set_language`](Translator::set_language) empties the table;
/// catalogs must then be loaded again.
///
/// # Example
///
/// ```
/// use phrasebook::{Translator, args};
///
/// let mut translator = Translator::builder()
///     .language("de")
///     .build();
///
/// translator.load_str(r#""Phrases"
/// {
///     "welcome"
///     {
///         "en" "Welcome, {0}!"
///         "de" "Willkommen, {0}!"
///     }
/// }"#).unwrap();
///
/// assert_eq!(translator.format("%t", &args!["welcome", "Ada"]).unwrap(), "Willkommen, Ada!");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into), on(PathBuf, into))]
pub struct Translator {
    /// Active language code (e.g., "en", "de", "pt-BR").
    #[builder(default = "en".to_string())]
    language: String,

    /// Directory that relative catalog names are resolved against.
    #[builder(default = PathBuf::from("."))]
    directory: PathBuf,

    /// Extension added to catalog names without one, including the dot.
    #[builder(default = DEFAULT_EXTENSION.to_string())]
    extension: String,

    /// Limit on nested category expansions during `format`.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Categories loaded for `language`.
    #[builder(skip)]
    categories: CategoryTable,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator for English catalogs in `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Translator::builder().directory(directory.into()).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the active language and drop every loaded category.
    ///
    /// The table only ever holds phrases for one language, so catalogs have to
    /// be loaded again after this call. This happens even if `language` equals
    /// the current one.
    pub fn set_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        debug!(
            from = %self.language,
            to = %language,
            dropped = self.categories.len(),
            "language changed"
        );
        self.language = language;
        self.categories.clear();
    }

    // =========================================================================
    // Table Access
    // =========================================================================

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Get the loaded categories (read-only).
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Number of loaded categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True until a catalog with at least one category has been loaded.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // =========================================================================
    // Catalog Loading
    // =========================================================================

    /// Resolve a catalog name to a path inside the directory.
    ///
    /// The default extension is appended when `file_name` has none.
    pub fn resolve_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        let file_name = file_name.as_ref();
        if file_name.extension().is_some() {
            return self.directory.join(file_name);
        }
        let mut name = OsString::from(file_name.as_os_str());
        name.push(&self.extension);
        self.directory.join(name)
    }

    /// Load a catalog file and merge it into the table.
    ///
    /// Returns the number of categories added. If parsing fails, categories
    /// from blocks before the error stay loaded.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut translator = Translator::new("assets/lang");
    /// translator.load("menu")?; // reads assets/lang/menu.phrases
    /// ```
    pub fn load(&mut self, file_name: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = self.resolve_path(file_name);
        if !path.is_file() {
            return Err(LoadError::NotFound { path });
        }

        let bytes = fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound { path: path.clone() },
            _ => LoadError::Io {
                path: path.clone(),
                source,
            },
        })?;
        let content = String::from_utf8(bytes)
            .map_err(|_| LoadError::from_parse(&path, &ParseError::InvalidUtf8))?;

        self.merge(&content, &path)
    }

    /// Load catalog text from a string and merge it into the table.
    ///
    /// Errors report the path as `<language>`.
    pub fn load_str(&mut self, content: &str) -> Result<usize, LoadError> {
        let path = PathBuf::from(format!("<{}>", self.language));
        self.merge(content, &path)
    }

    /// Internal loading implementation.
    fn merge(&mut self, content: &str, path: &Path) -> Result<usize, LoadError> {
        let count = parse_catalog_into(content, &self.language, &mut self.categories)
            .map_err(|e| {
                warn!(
                    path = %path.display(),
                    language = %self.language,
                    error = %e,
                    "catalog load aborted"
                );
                LoadError::from_parse(path, &e)
            })?;
        debug!(
            path = %path.display(),
            language = %self.language,
            added = count,
            total = self.categories.len(),
            "catalog loaded"
        );
        Ok(count)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Format a template with positional arguments.
    ///
    /// Never changes the table. With nothing loaded every `%t` lookup fails
    /// with [`EvalError::KeyNotFound`].
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String, EvalError> {
        let mut ctx = FormatContext::with_max_depth(args, self.max_depth);
        format_template(template, &self.categories, &mut ctx)
    }
}
