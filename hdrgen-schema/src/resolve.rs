//! Type reference resolution.
//!
//! Every type mentioned in an API description is either a primitive of the
//! target language, passed through verbatim, or a reference to a named
//! entity of the schema. The distinction is purely lexical: a name starting
//! with an uppercase letter is a reference.

use std::fmt;

/// Name of the schema's own boolean value type. `bool` always resolves to it.
pub const BOOL_VALUE_TYPE: &str = "Bool";

/// Name of the value type that bitmask companion typedefs are built on.
pub const FLAGS_VALUE_TYPE: &str = "Flags";

/// The "no value" return type.
pub const VOID: &str = "void";

/// A classified type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Target-language primitive, rendered verbatim.
    Primitive(String),
    /// Reference to a named schema entity.
    Reference(String),
}

impl TypeRef {
    /// Classifies a raw type name.
    ///
    /// `bool` is substituted with [`BOOL_VALUE_TYPE`] before classification.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "bool" {
            return Self::Reference(BOOL_VALUE_TYPE.to_string());
        }
        match raw.chars().next() {
            Some(c) if c.is_uppercase() => Self::Reference(raw.to_string()),
            _ => Self::Primitive(raw.to_string()),
        }
    }

    /// Builds a reference to a known entity without classifying it.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// The `void` primitive.
    #[must_use]
    pub fn void() -> Self {
        Self::Primitive(VOID.to_string())
    }

    /// Returns the bare type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(name) | Self::Reference(name) => name,
        }
    }

    /// Returns the entity name if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(name) => Some(name),
            Self::Primitive(_) => None,
        }
    }

    /// Returns true for the `void` primitive.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(name) if name == VOID)
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        Self::void()
    }
}

impl From<&str> for TypeRef {
    fn from(raw: &str) -> Self {
        Self::resolve(raw)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
