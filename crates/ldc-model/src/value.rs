//! Typed cell values.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

/// Literal produced when a missing value is stringified.
pub const MISSING_TEXT: &str = "NAN";

/// A single cell of a [`Table`](crate::Table).
///
/// `Null` is the explicit "missing or unparseable" marker and is distinct
/// from an empty `Text`. Equality is total so that records can be hashed for
/// duplicate detection: `Null == Null`, and numbers compare by bit pattern.
/// `Number` never holds `NaN`; parsers map `NaN` to `Null`.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// Free text, kept verbatim until a stage rewrites it.
    Text(String),
    /// Calendar date without time of day.
    Date(NaiveDate),
    /// Floating-point number.
    Number(f64),
}

impl Value {
    /// Builds a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the string form of a present value, `None` for `Null`.
    ///
    /// Dates render as `YYYY-MM-DD` and numbers via [`format_number`], the
    /// same forms the CSV writer uses.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.clone()),
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            Self::Number(number) => Some(format_number(*number)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Text(text) => text.hash(state),
            Self::Date(date) => date.hash(state),
            Self::Number(number) => number.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value {
    /// Writes the CSV rendering of the value; `Null` writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Number(number) => f.write_str(&format_number(*number)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Null
        } else {
            Self::Number(value)
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Formats a number the way the cleaned CSV stores it.
///
/// Integral values below 1e16 keep one decimal place (`1000.0`) so a cost
/// column always reads as floating point; everything else uses the shortest
/// round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
