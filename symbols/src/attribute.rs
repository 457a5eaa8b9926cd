//! Attribute key table with pass-through fallback.

use std::collections::HashMap;

/// Standard attribute codes, in registration order.
pub const STANDARD_ATTRIBUTES: &[(&str, &str)] = &[
    ("rotation", "r"),
    ("radius", "R"),
    ("x2", "X"),
    ("y2", "Y"),
    ("width", "w"),
    ("height", "h"),
    ("tint", "t"),
    ("fillColor", "f"),
    ("fillAlpha", "F"),
    ("lineColor", "c"),
    ("lineWidth", "W"),
    ("lineAlpha", "A"),
    ("alpha", "a"),
    ("image", "i"),
    ("strokeThickness", "S"),
    ("strokeColor", "sc"),
    ("fontFamily", "ff"),
    ("fontSize", "s"),
    ("text", "T"),
    ("children", "C"),
    ("scaleX", "sx"),
    ("scaleY", "sy"),
    ("anchorX", "ax"),
    ("anchorY", "ay"),
    ("visible", "v"),
    ("zIndex", "z"),
    ("blendMode", "b"),
    ("images", "I"),
    ("started", "p"),
    ("loop", "l"),
    ("duration", "d"),
];

/// Maps long attribute names to short codes.
///
/// Attributes are an open set: a name that was never registered is still
/// encodable, it just travels under its long name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AttributeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding [`STANDARD_ATTRIBUTES`].
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_ATTRIBUTES
            .iter()
            .map(|(name, code)| (*name, *code))
            .collect()
    }

    /// Registers `name`, replacing any previous code for it.
    pub(crate) fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) {
        let name = name.into();
        let code = code.into();
        if let Some(&idx) = self.index.get(&name) {
            self.entries[idx].1 = code;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, code));
        }
    }

    /// Unregisters `name`. Returns its code if it was present.
    pub(crate) fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.index.remove(name)?;
        let (_, code) = self.entries.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(code)
    }

    /// Returns the short code for `name`, or `name` itself when unregistered.
    #[must_use]
    pub fn code<'a>(&'a self, name: &'a str) -> &'a str {
        match self.get(name) {
            Some(code) => code,
            None => {
                tracing::trace!(attribute = name, "unregistered attribute, using long name");
                name
            }
        }
    }

    /// Returns the short code for `name` if it is registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attribute is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, code)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }
}

impl<N, C> FromIterator<(N, C)> for AttributeTable
where
    N: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, code) in iter {
            table.insert(name, code);
        }
        table
    }
}
