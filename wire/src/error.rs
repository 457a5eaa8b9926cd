//! Error types for token formatting.

use std::fmt;

/// Result type for token formatting.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while formatting a value into a wire token.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum WireError {
    /// `NaN` and infinities have no fixed-point representation.
    NonFiniteNumber { value: f64 },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteNumber { value } => {
                write!(f, "non-finite number {value} has no fixed-point form")
            }
        }
    }
}

impl std::error::Error for WireError {}
