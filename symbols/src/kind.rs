//! Closed symbol sets: command kinds and entity types.

use std::fmt;
use std::str::FromStr;

use crate::error::SymbolError;

/// The kind of a wire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")
)]
pub enum CommandKind {
    /// A new entity appears.
    Create,
    /// Attributes of an existing entity change.
    Update,
}

impl CommandKind {
    /// Every command kind, in table order.
    pub const ALL: [Self; 2] = [Self::Create, Self::Update];

    /// Returns the long-form name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SymbolError::UnknownCommand {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for CommandKind {
    type Error = SymbolError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// The kind of renderable entity a create command introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")
)]
pub enum EntityType {
    Rectangle,
    Circle,
    Group,
    Line,
    Sprite,
    Text,
    #[cfg_attr(feature = "serde", serde(rename = "SPRITEANIMATION"))]
    SpriteAnimation,
}

impl EntityType {
    /// Number of entity types.
    pub const COUNT: usize = 7;

    /// Every entity type, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Rectangle,
        Self::Circle,
        Self::Group,
        Self::Line,
        Self::Sprite,
        Self::Text,
        Self::SpriteAnimation,
    ];

    /// Returns the long-form name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "RECTANGLE",
            Self::Circle => "CIRCLE",
            Self::Group => "GROUP",
            Self::Line => "LINE",
            Self::Sprite => "SPRITE",
            Self::Text => "TEXT",
            Self::SpriteAnimation => "SPRITEANIMATION",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityType {
    type Err = SymbolError;

    /// Parses a long-form name, ignoring case and `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == folded)
            .ok_or_else(|| SymbolError::UnknownEntityType {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for EntityType {
    type Error = SymbolError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
