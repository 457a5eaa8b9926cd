//! Entity events as supplied by the caller.

use symbols::EntityType;

use crate::state::EntityState;
use crate::types::EntityId;

/// One encodable entity event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", rename_all = "lowercase")
)]
pub enum EntityEvent {
    /// A new entity appears.
    Create {
        id: EntityId,
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        entity_type: EntityType,
    },
    /// Attributes of an entity change at `time`.
    Update {
        id: EntityId,
        time: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        diff: EntityState,
    },
}

impl EntityEvent {
    /// Creates a create event.
    #[must_use]
    pub fn create(id: impl Into<EntityId>, entity_type: EntityType) -> Self {
        Self::Create {
            id: id.into(),
            entity_type,
        }
    }

    /// Creates an update event.
    #[must_use]
    pub fn update(id: impl Into<EntityId>, time: f64, diff: EntityState) -> Self {
        Self::Update {
            id: id.into(),
            time,
            diff,
        }
    }

    /// Returns the entity this event is about.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        match self {
            Self::Create { id, .. } | Self::Update { id, .. } => *id,
        }
    }
}
