//! Error types for command encoding.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding commands.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CodecError {
    /// Symbol table error.
    Symbols(symbols::SymbolError),

    /// Token formatting error.
    Wire(wire::WireError),

    /// The entity type is unknown, or the tables carry no code for it.
    UnsupportedType {
        name: String,
        source: symbols::SymbolError,
    },

    /// A diff value could not be formatted.
    InvalidValue {
        key: String,
        source: wire::WireError,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbols(e) => write!(f, "symbol table error: {e}"),
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::UnsupportedType { name, .. } => write!(f, "unsupported entity type: {name}"),
            Self::InvalidValue { key, source } => {
                write!(f, "invalid value for attribute '{key}': {source}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Symbols(e) | Self::UnsupportedType { source: e, .. } => Some(e),
            Self::Wire(e) | Self::InvalidValue { source: e, .. } => Some(e),
        }
    }
}

impl From<symbols::SymbolError> for CodecError {
    fn from(err: symbols::SymbolError) -> Self {
        Self::Symbols(err)
    }
}

impl From<wire::WireError> for CodecError {
    fn from(err: wire::WireError) -> Self {
        Self::Wire(err)
    }
}
