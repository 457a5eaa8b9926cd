//! Create and update command encoders for the entwire text protocol.
//!
//! This is the main codec crate that ties together symbols and wire to turn
//! entity events into one-line text commands for a remote renderer.
//!
//! # Features
//!
//! - `C <id> <type>` create commands
//! - `U <id> <time> [<key> <value>]*` update commands from an ordered diff
//! - Short codes for registered attributes, long names for the rest
//! - Optional `serde` support for events and diffs
//!
//! # Design Principles
//!
//! - **Encode only** - There is no decoding path.
//! - **Stateless** - Encoding reads shared, immutable tables and nothing else.
//! - **Deterministic** - Same inputs produce byte-identical output.

mod error;
mod event;
mod serializer;
mod state;
mod types;

pub use error::{CodecError, CodecResult};
pub use event::EntityEvent;
pub use serializer::Serializer;
pub use state::EntityState;
pub use symbols::{CommandKind, EntityType, SymbolTables};
pub use types::EntityId;
pub use wire::Value;
