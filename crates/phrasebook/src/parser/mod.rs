//! Phrase catalog and placeholder parsers.
//!
//! Turns `.phrases` catalog text into a [`CategoryTable`](crate::CategoryTable)
//! for one language. Parsing is pure: the caller supplies the text.

mod catalog;
pub mod error;
mod placeholder;

pub use catalog::{parse_catalog, parse_catalog_into};
pub use error::ParseError;
pub use placeholder::{Placeholder, scan_placeholders};
