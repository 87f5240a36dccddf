//! Values that can be substituted into a placeholder.

use std::fmt;

use chrono::NaiveDate;

/// A value bound to a placeholder name.
///
/// Numbers keep their type so numeric format specs (`04d`, `.2f`) can apply;
/// anything else is carried as display text.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FormatValue {
    /// Capture any displayable value as text.
    pub fn display(value: impl fmt::Display) -> Self {
        FormatValue::Text(value.to_string())
    }

    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, FormatValue::Integer(_) | FormatValue::Float(_))
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Text(s) => f.write_str(s),
            FormatValue::Integer(i) => write!(f, "{i}"),
            FormatValue::Float(x) => write!(f, "{x}"),
            FormatValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(s: &str) -> Self {
        FormatValue::Text(s.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(s: String) -> Self {
        FormatValue::Text(s)
    }
}

impl From<&String> for FormatValue {
    fn from(s: &String) -> Self {
        FormatValue::Text(s.clone())
    }
}

impl From<char> for FormatValue {
    fn from(c: char) -> Self {
        FormatValue::Text(c.to_string())
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatValue {
            fn from(i: $t) -> Self {
                FormatValue::Integer(i64::from(i))
            }
        })*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FormatValue {
    fn from(x: f32) -> Self {
        FormatValue::Float(f64::from(x))
    }
}

impl From<f64> for FormatValue {
    fn from(x: f64) -> Self {
        FormatValue::Float(x)
    }
}

impl From<bool> for FormatValue {
    fn from(b: bool) -> Self {
        FormatValue::Bool(b)
    }
}

impl From<NaiveDate> for FormatValue {
    fn from(d: NaiveDate) -> Self {
        FormatValue::Text(d.format("%Y-%m-%d").to_string())
    }
}
