//! Attribute values and their wire tokens.

use std::fmt;

use crate::error::WireResult;
use crate::escape::escape;
use crate::number::write_number;

/// A typed attribute value.
///
/// Only `Float` is formatted as a fixed-point number. Every other variant is
/// converted to text and escaped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns `true` if this value takes the numeric formatting path.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Appends the wire token for this value to `out`.
    pub fn write_token(&self, out: &mut String) -> WireResult<()> {
        match self {
            Self::Float(value) => write_number(out, *value)?,
            Self::Text(text) => out.push_str(&escape(text)),
            // Digits, signs and `true`/`false` never need escaping.
            Self::Int(value) => out.push_str(&value.to_string()),
            Self::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        }
        Ok(())
    }
}

/// Formats one value into its wire token.
pub fn format_value(value: &Value) -> WireResult<String> {
    let mut out = String::new();
    value.write_token(&mut out)?;
    Ok(out)
}

impl fmt::Display for Value {
    /// Shows the unescaped text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
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
