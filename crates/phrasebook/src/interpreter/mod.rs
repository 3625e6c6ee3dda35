//! Interpolation engine and translator facade.
//!
//! This module takes `%`-directive templates and produces formatted strings.
//! It looks up categories, consumes positional arguments in order and expands
//! the slots of nested phrases.

mod context;
mod error;
mod evaluator;
mod translator;

pub use context::{DEFAULT_MAX_DEPTH, FormatContext};
pub use error::{EvalError, LoadError, compute_suggestions};
pub use evaluator::{MARKER, format, format_template};
pub use translator::{DEFAULT_EXTENSION, Translator};
