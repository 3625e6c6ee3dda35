pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    EvalError, FormatContext, LoadError, Translator, compute_suggestions, format, format_template,
};
pub use parser::{ParseError, parse_catalog, parse_catalog_into};
pub use types::{Category, CategoryTable, FormatSlot, SlotKind, Value};

/// Creates a `Vec<Value>` of positional arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans or strings directly.
///
/// # Example
///
/// ```
/// use phrasebook::{args, Value};
///
/// let a = args!["greet", 3, true];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0].as_string(), Some("greet"));
/// assert_eq!(a[1].as_number(), Some(3));
/// assert_eq!(a[2], Value::Bool(true));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![ $( ::std::convert::Into::<$crate::Value>::into($value) ),+ ]
    };
}
