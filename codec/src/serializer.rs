//! Create and update command encoding.

use symbols::{CommandKind, EntityType, SymbolTables};
use wire::Line;

use crate::error::{CodecError, CodecResult};
use crate::event::EntityEvent;
use crate::state::EntityState;
use crate::types::EntityId;

/// Encodes entity events into wire command lines.
///
/// Holds only a shared reference to validated tables, so one serializer can
/// be used from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'t> {
    tables: &'t SymbolTables,
}

impl Serializer<'static> {
    /// Creates a serializer over the process-wide standard tables.
    pub fn standard() -> CodecResult<Self> {
        Ok(Self::new(SymbolTables::standard()?))
    }
}

impl<'t> Serializer<'t> {
    /// Creates a serializer over `tables`.
    #[must_use]
    pub const fn new(tables: &'t SymbolTables) -> Self {
        Self { tables }
    }

    /// Returns the tables this serializer encodes with.
    #[must_use]
    pub const fn tables(&self) -> &'t SymbolTables {
        self.tables
    }

    /// Encodes `C <id> <type>`.
    ///
    /// Fails with [`CodecError::UnsupportedType`] when the type table has no
    /// code for `entity_type`.
    pub fn encode_create(
        &self,
        id: impl Into<EntityId>,
        entity_type: EntityType,
    ) -> CodecResult<String> {
        let id = id.into();
        let type_code = self.tables.types().code(entity_type).map_err(|source| {
            tracing::warn!(%id, %entity_type, "create rejected: type has no code");
            CodecError::UnsupportedType {
                name: entity_type.name().to_string(),
                source,
            }
        })?;

        let mut line = Line::with_capacity(8);
        line.push(self.tables.commands().code(CommandKind::Create));
        line.push_display(id);
        line.push(type_code);
        Ok(line.finish())
    }

    /// Encodes a create command for an entity type given by its long name.
    ///
    /// Unknown names fail with the same [`CodecError::UnsupportedType`] as
    /// types missing from the table.
    pub fn encode_create_named(&self, id: impl Into<EntityId>, name: &str) -> CodecResult<String> {
        let entity_type: EntityType = name.parse().map_err(|source| {
            tracing::warn!(name, "create rejected: unknown entity type");
            CodecError::UnsupportedType {
                name: name.to_string(),
                source,
            }
        })?;
        self.encode_create(id, entity_type)
    }

    /// Encodes `U <id> <time> [<key> <value>]*`.
    ///
    /// Entries appear in the diff's order. Registered keys are replaced by
    /// their short code, other keys are written as-is.
    pub fn encode_update(
        &self,
        id: impl Into<EntityId>,
        diff: &EntityState,
        frame_time: f64,
    ) -> CodecResult<String> {
        let mut line = Line::with_capacity(16 + diff.len() * 8);
        line.push(self.tables.commands().code(CommandKind::Update));
        line.push_display(id.into());
        line.push_number(frame_time).map_err(|err| {
            tracing::warn!(frame_time, "update rejected: frame time is not finite");
            err
        })?;

        let attributes = self.tables.attributes();
        for (key, value) in diff.iter() {
            line.push(attributes.code(key));
            line.push_value(value).map_err(|source| {
                tracing::warn!(attribute = key, %source, "update rejected");
                CodecError::InvalidValue {
                    key: key.to_string(),
                    source,
                }
            })?;
        }
        Ok(line.finish())
    }

    /// Encodes one event.
    pub fn encode_event(&self, event: &EntityEvent) -> CodecResult<String> {
        match event {
            EntityEvent::Create { id, entity_type } => self.encode_create(*id, *entity_type),
            EntityEvent::Update { id, time, diff } => self.encode_update(*id, diff, *time),
        }
    }

    /// Encodes events as newline-separated commands, without a trailing newline.
    ///
    /// Stops at the first event that fails to encode.
    pub fn encode_events<'e, I>(&self, events: I) -> CodecResult<String>
    where
        I: IntoIterator<Item = &'e EntityEvent>,
    {
        let mut out = String::new();
        for (idx, event) in events.into_iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(&self.encode_event(event)?);
        }
        Ok(out)
    }
}
