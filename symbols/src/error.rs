//! Symbol table errors.

use std::fmt;

use crate::{CommandKind, EntityType};

/// Result type for symbol table operations.
pub type SymbolResult<T> = Result<T, SymbolError>;

/// Errors that can occur when building or querying symbol tables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolError {
    /// Two attribute names share one short code.
    DuplicateAttributeCode {
        code: String,
        first: String,
        second: String,
    },

    /// Two command kinds share one short code.
    DuplicateCommandCode {
        code: String,
        first: CommandKind,
        second: CommandKind,
    },

    /// Two entity types share one short code.
    DuplicateTypeCode {
        code: String,
        first: EntityType,
        second: EntityType,
    },

    /// A short code cannot be written as a single wire token.
    InvalidCode { code: String, reason: CodeReason },

    /// The entity type has no code in this table.
    UnsupportedType { entity_type: EntityType },

    /// The name does not match any known entity type.
    UnknownEntityType { name: String },

    /// The name does not match any known command kind.
    UnknownCommand { name: String },
}

/// Why a short code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeReason {
    Empty,
    ContainsSpace,
    ContainsQuote,
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAttributeCode {
                code,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate attribute code '{code}' for '{first}' and '{second}'"
                )
            }
            Self::DuplicateCommandCode {
                code,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate command code '{code}' for {first} and {second}"
                )
            }
            Self::DuplicateTypeCode {
                code,
                first,
                second,
            } => {
                write!(f, "duplicate type code '{code}' for {first} and {second}")
            }
            Self::InvalidCode { code, reason } => {
                write!(f, "invalid short code {code:?}: {reason}")
            }
            Self::UnsupportedType { entity_type } => {
                write!(f, "unsupported entity type: {entity_type}")
            }
            Self::UnknownEntityType { name } => write!(f, "unknown entity type: {name}"),
            Self::UnknownCommand { name } => write!(f, "unknown command: {name}"),
        }
    }
}

impl fmt::Display for CodeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "code is empty",
            Self::ContainsSpace => "code contains a space",
            Self::ContainsQuote => "code contains an apostrophe",
        };
        write!(f, "{reason}")
    }
}

impl std::error::Error for SymbolError {}
