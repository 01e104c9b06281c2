use serde::{Deserialize, Serialize};
use std::fmt;

/// Default vocabulary bound to unprefixed semantic annotations.
pub const CORE_VOCABULARY: &str = "http://www.sdl.com/web/schemas/core";

/// schema.org vocabulary, the usual choice for public-facing entities.
pub const SCHEMA_ORG_VOCABULARY: &str = "http://schema.org/";

///
/// Vocabulary
///
/// A namespace for semantic concepts together with its short alias. The
/// prefix is what published schemas and model annotations refer to; the
/// vocabulary URI is the stable identity.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vocabulary {
    pub prefix: String,
    pub vocab: String,
}

impl Vocabulary {
    #[must_use]
    pub fn new(prefix: impl Into<String>, vocab: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            vocab: vocab.into(),
        }
    }
}

///
/// SchemaSemantics
///
/// A (prefix, entity) pair declared on a schema: "this schema represents
/// entity `entity` in the vocabulary aliased by `prefix`". Declaration order
/// matters; the first entity registered for a vocabulary is the primary one.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaSemantics {
    pub prefix: String,
    pub entity: String,
}

impl SchemaSemantics {
    #[must_use]
    pub fn new(prefix: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entity: entity.into(),
        }
    }
}

impl fmt::Display for SchemaSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.entity)
    }
}

///
/// FieldSemantics
///
/// A fully-qualified semantic identifier a schema field satisfies:
/// `(prefix, entity, property)`. This is the lookup key of the semantic
/// index.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldSemantics {
    pub prefix: String,
    pub entity: String,
    pub property: String,
}

impl FieldSemantics {
    #[must_use]
    pub fn new(
        prefix: impl Into<String>,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            entity: entity.into(),
            property: property.into(),
        }
    }
}

impl fmt::Display for FieldSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.prefix, self.entity, self.property)
    }
}

///
/// TESTS
///
