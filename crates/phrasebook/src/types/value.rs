use std::fmt::{Display, Formatter, Result as FmtResult};

/// A positional argument passed to [`format`](crate::interpreter::format).
///
/// Arguments are opaque to the engine: each directive or slot that consumes
/// one only ever needs its [`Display`] form, either to print it or to use it
/// as a category name.
///
/// # Example
///
/// ```
/// use phrasebook::Value;
///
/// let count: Value = 42.into();
/// let key: Value = "menu.start".into();
///
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(key.as_string(), Some("menu.start"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean flag.
    Bool(bool),

    /// A string value, also used for category keys.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a command-line style argument: integers become numbers,
    /// `true`/`false` become booleans, anything else stays a string.
    pub fn parse_lossy(input: &str) -> Value {
        if let Ok(n) = input.parse::<i64>() {
            Value::Number(n)
        } else if let Ok(b) = input.parse::<bool>() {
            Value::Bool(b)
        } else {
            Value::String(input.to_string())
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Counts above `i64::MAX` saturate to `i64::MAX`.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn usize_conversion_saturates() {
        assert_eq!(Value::from(7_usize), Value::Number(7));
        assert_eq!(Value::from(usize::MAX), Value::Number(i64::MAX));
    }
}
