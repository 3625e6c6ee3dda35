//! Terminal and JSON output helpers.

mod diagnostic;
pub mod table;

pub use diagnostic::CatalogDiagnostic;
