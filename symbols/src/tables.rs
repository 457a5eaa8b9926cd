//! Symbol table construction and validation.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::attribute::AttributeTable;
use crate::error::{CodeReason, SymbolError, SymbolResult};
use crate::{CommandKind, EntityType};

/// Standard command codes.
pub const STANDARD_COMMANDS: [(CommandKind, &str); 2] =
    [(CommandKind::Create, "C"), (CommandKind::Update, "U")];

/// Standard entity type codes.
pub const STANDARD_TYPES: [(EntityType, &str); EntityType::COUNT] = [
    (EntityType::Rectangle, "R"),
    (EntityType::Circle, "C"),
    (EntityType::Group, "G"),
    (EntityType::Line, "L"),
    (EntityType::Sprite, "S"),
    (EntityType::Text, "T"),
    (EntityType::SpriteAnimation, "A"),
];

/// One code per command kind.
///
/// Every kind always has a code, so lookups cannot miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    codes: [String; 2],
}

impl CommandTable {
    /// Returns the code for `kind`.
    #[must_use]
    pub fn code(&self, kind: CommandKind) -> &str {
        &self.codes[kind.index()]
    }

    /// Iterates `(kind, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CommandKind, &str)> {
        CommandKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.code(kind)))
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            codes: STANDARD_COMMANDS.map(|(_, code)| code.to_string()),
        }
    }
}

/// At most one code per entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    codes: [Option<String>; EntityType::COUNT],
}

impl TypeTable {
    /// Creates a table with the standard codes.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::default();
        for (ty, code) in STANDARD_TYPES {
            table.codes[ty.index()] = Some(code.to_string());
        }
        table
    }

    /// Returns the code for `entity_type`.
    pub fn code(&self, entity_type: EntityType) -> SymbolResult<&str> {
        self.codes[entity_type.index()]
            .as_deref()
            .ok_or(SymbolError::UnsupportedType { entity_type })
    }

    /// Returns `true` if `entity_type` has a code.
    #[must_use]
    pub fn supports(&self, entity_type: EntityType) -> bool {
        self.codes[entity_type.index()].is_some()
    }

    /// Iterates `(type, code)` pairs for registered types.
    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &str)> {
        EntityType::ALL
            .into_iter()
            .filter_map(move |ty| self.codes[ty.index()].as_deref().map(|code| (ty, code)))
    }
}

/// The three validated symbol tables used by the encoders.
///
/// A value of this type has always passed [`SymbolTables::validate`]; tables
/// are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTables {
    attributes: AttributeTable,
    commands: CommandTable,
    types: TypeTable,
}

static STANDARD: OnceLock<SymbolResult<SymbolTables>> = OnceLock::new();

impl SymbolTables {
    /// Returns the process-wide standard tables.
    ///
    /// Built and validated on first call; later calls return the cached
    /// outcome.
    pub fn standard() -> SymbolResult<&'static Self> {
        STANDARD
            .get_or_init(|| {
                let tables = Self::builder().build();
                match &tables {
                    Ok(tables) => tracing::debug!(
                        attributes = tables.attributes.len(),
                        "standard symbol tables validated"
                    ),
                    Err(err) => tracing::error!(%err, "standard symbol tables are invalid"),
                }
                tables
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Creates a builder seeded with the standard tables.
    #[must_use]
    pub fn builder() -> SymbolTablesBuilder {
        SymbolTablesBuilder::default()
    }

    /// Returns the attribute table.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    /// Returns the command table.
    #[must_use]
    pub const fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Returns the entity type table.
    #[must_use]
    pub const fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Validates table invariants.
    ///
    /// Codes must be distinct within each table; the same code may appear in
    /// two different tables.
    pub fn validate(&self) -> SymbolResult<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (name, code) in self.attributes.iter() {
            validate_code(code)?;
            if let Some(first) = seen.insert(code, name) {
                return Err(SymbolError::DuplicateAttributeCode {
                    code: code.to_string(),
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
        }

        let mut seen: HashMap<&str, CommandKind> = HashMap::new();
        for (kind, code) in self.commands.iter() {
            validate_code(code)?;
            if let Some(first) = seen.insert(code, kind) {
                return Err(SymbolError::DuplicateCommandCode {
                    code: code.to_string(),
                    first,
                    second: kind,
                });
            }
        }

        let mut seen: HashMap<&str, EntityType> = HashMap::new();
        for (ty, code) in self.types.iter() {
            validate_code(code)?;
            if let Some(first) = seen.insert(code, ty) {
                return Err(SymbolError::DuplicateTypeCode {
                    code: code.to_string(),
                    first,
                    second: ty,
                });
            }
        }
        Ok(())
    }
}

/// Builder for `SymbolTables`.
#[derive(Debug, Clone)]
pub struct SymbolTablesBuilder {
    attributes: AttributeTable,
    commands: CommandTable,
    types: TypeTable,
}

impl Default for SymbolTablesBuilder {
    fn default() -> Self {
        Self {
            attributes: AttributeTable::standard(),
            commands: CommandTable::default(),
            types: TypeTable::standard(),
        }
    }
}

impl SymbolTablesBuilder {
    /// Creates a builder with no attributes and no entity types.
    ///
    /// Commands keep their standard codes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            attributes: AttributeTable::new(),
            commands: CommandTable::default(),
            types: TypeTable::default(),
        }
    }

    /// Registers or overrides an attribute code.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.attributes.insert(name, code);
        self
    }

    /// Unregisters an attribute; it will fall back to its long name.
    #[must_use]
    pub fn remove_attribute(mut self, name: &str) -> Self {
        self.attributes.remove(name);
        self
    }

    /// Overrides a command code.
    #[must_use]
    pub fn command(mut self, kind: CommandKind, code: impl Into<String>) -> Self {
        self.commands.codes[kind.index()] = code.into();
        self
    }

    /// Registers or overrides an entity type code.
    #[must_use]
    pub fn entity_type(mut self, entity_type: EntityType, code: impl Into<String>) -> Self {
        self.types.codes[entity_type.index()] = Some(code.into());
        self
    }

    /// Unregisters an entity type; creating it will fail.
    #[must_use]
    pub fn remove_entity_type(mut self, entity_type: EntityType) -> Self {
        self.types.codes[entity_type.index()] = None;
        self
    }

    /// Builds the tables after validation.
    pub fn build(self) -> SymbolResult<SymbolTables> {
        let tables = SymbolTables {
            attributes: self.attributes,
            commands: self.commands,
            types: self.types,
        };
        tables.validate()?;
        Ok(tables)
    }
}

fn validate_code(code: &str) -> SymbolResult<()> {
    let reason = if code.is_empty() {
        CodeReason::Empty
    } else if code.contains(' ') {
        CodeReason::ContainsSpace
    } else if code.contains('\'') {
        CodeReason::ContainsQuote
    } else {
        return Ok(());
    };
    Err(SymbolError::InvalidCode {
        code: code.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_validate() {
        let tables = SymbolTables::standard().unwrap();
        assert_eq!(tables.attributes().len(), 31);
        assert_eq!(tables.commands().code(CommandKind::Create), "C");
        assert_eq!(tables.commands().code(CommandKind::Update), "U");
        assert_eq!(tables.types().code(EntityType::Circle), Ok("C"));
        assert_eq!(tables.types().code(EntityType::SpriteAnimation), Ok("A"));
    }

    #[test]
    fn standard_is_shared() {
        let a = SymbolTables::standard().unwrap();
        let b = SymbolTables::standard().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn codes_may_repeat_across_tables() {
        // "C" is children, CREATE and CIRCLE at once.
        let tables = SymbolTables::standard().unwrap();
        assert_eq!(tables.attributes().code("children"), "C");
        assert_eq!(tables.commands().code(CommandKind::Create), "C");
        assert_eq!(tables.types().code(EntityType::Circle), Ok("C"));
    }

    #[test]
    fn rejects_duplicate_attribute_codes() {
        let err = SymbolTables::builder()
            .attribute("spin", "r")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SymbolError::DuplicateAttributeCode {
                code: "r".to_string(),
                first: "rotation".to_string(),
                second: "spin".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_command_codes() {
        let err = SymbolTables::builder()
            .command(CommandKind::Update, "C")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SymbolError::DuplicateCommandCode {
                first: CommandKind::Create,
                second: CommandKind::Update,
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_type_codes() {
        let err = SymbolTables::builder()
            .entity_type(EntityType::SpriteAnimation, "S")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SymbolError::DuplicateTypeCode {
                first: EntityType::Sprite,
                second: EntityType::SpriteAnimation,
                ..
            }
        ));
    }

    #[test]
    fn rejects_untokenizable_codes() {
        let err = SymbolTables::builder()
            .attribute("spin", "s p")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SymbolError::InvalidCode {
                reason: CodeReason::ContainsSpace,
                ..
            }
        ));

        let err = SymbolTables::builder()
            .command(CommandKind::Create, "")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SymbolError::InvalidCode {
                reason: CodeReason::Empty,
                ..
            }
        ));

        let err = SymbolTables::builder()
            .entity_type(EntityType::Text, "T'")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SymbolError::InvalidCode {
                reason: CodeReason::ContainsQuote,
                ..
            }
        ));
    }

    #[test]
    fn override_resolves_duplicate() {
        let tables = SymbolTables::builder()
            .attribute("rotation", "rot")
            .attribute("spin", "r")
            .build()
            .unwrap();
        assert_eq!(tables.attributes().code("rotation"), "rot");
        assert_eq!(tables.attributes().code("spin"), "r");
    }

    #[test]
    fn removed_type_is_unsupported() {
        let tables = SymbolTables::builder()
            .remove_entity_type(EntityType::Line)
            .build()
            .unwrap();
        assert!(!tables.types().supports(EntityType::Line));
        assert_eq!(
            tables.types().code(EntityType::Line),
            Err(SymbolError::UnsupportedType {
                entity_type: EntityType::Line
            })
        );
        assert_eq!(tables.types().iter().count(), EntityType::COUNT - 1);
    }

    #[test]
    fn empty_builder_keeps_commands() {
        let tables = SymbolTablesBuilder::empty().build().unwrap();
        assert!(tables.attributes().is_empty());
        assert_eq!(tables.types().iter().count(), 0);
        assert_eq!(tables.commands().code(CommandKind::Update), "U");
    }

    #[test]
    fn removed_attribute_falls_back() {
        let tables = SymbolTables::builder()
            .remove_attribute("alpha")
            .build()
            .unwrap();
        assert_eq!(tables.attributes().code("alpha"), "alpha");
    }
}
