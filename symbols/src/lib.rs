//! Short-code symbol tables for the entwire text protocol.
//!
//! This crate maps verbose names to the short tokens used on the wire:
//! - Attribute keys (open set, unregistered keys pass through unchanged)
//! - Command kinds (closed set)
//! - Entity types (closed set)
//!
//! # Design Principles
//!
//! - **Validated once** - Tables are checked for duplicate codes when built,
//!   never on the encode path.
//! - **Immutable** - Built tables cannot be modified, so they can be shared
//!   freely across threads.
//! - **Fail loudly on closed sets** - A missing command or type code is an
//!   error, a missing attribute code is not.

mod attribute;
mod error;
mod kind;
mod tables;

pub use attribute::{AttributeTable, STANDARD_ATTRIBUTES};
pub use error::{CodeReason, SymbolError, SymbolResult};
pub use kind::{CommandKind, EntityType};
pub use tables::{
    CommandTable, SymbolTables, SymbolTablesBuilder, TypeTable, STANDARD_COMMANDS, STANDARD_TYPES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = SymbolTables::builder();
        let _ = SymbolTablesBuilder::empty();
        let _ = AttributeTable::standard();
        let _ = CommandKind::ALL;
        let _ = EntityType::ALL;
        let _ = STANDARD_ATTRIBUTES;
        let _ = STANDARD_COMMANDS;
        let _ = STANDARD_TYPES;

        // Error types
        let _: SymbolResult<()> = Ok(());
    }

    #[test]
    fn standard_data_covers_closed_sets() {
        assert_eq!(STANDARD_COMMANDS.len(), CommandKind::ALL.len());
        for (idx, (ty, _)) in STANDARD_TYPES.iter().enumerate() {
            assert_eq!(*ty, EntityType::ALL[idx]);
        }
    }

    #[test]
    fn tables_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymbolTables>();
    }
}
