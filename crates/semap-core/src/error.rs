use thiserror::Error as ThisError;

///
/// MapError
///
/// Error taxonomy of the mapping core.
///
/// `SchemaNotFound`, `PathTooShort`, `SchemaTooDeep`, and
/// `InvalidSemantics` signal deployment or development inconsistencies and
/// are fatal for the whole call. `Mapping` wraps a value-conversion failure
/// with field and target context; it is fatal for the property (and the
/// model being built), but batch entry points isolate it per item.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MapError {
    #[error("semantic schema '{schema_id}' is not known")]
    SchemaNotFound { schema_id: String },

    #[error("semantic field path '{path}' is too short for embed level {embed_level}")]
    PathTooShort { path: String, embed_level: usize },

    #[error("embedded mapping exceeded the maximum depth of {depth}")]
    SchemaTooDeep { depth: usize },

    #[error("invalid semantics for property {model}.{property}: target must be {expected}")]
    InvalidSemantics {
        model: String,
        property: String,
        expected: String,
    },

    #[error("model type '{model}' is not registered")]
    ModelNotRegistered { model: String },

    #[error("property setter expected model type '{expected}' but received '{actual}'")]
    ModelTypeMismatch { expected: String, actual: String },

    #[error("unable to map field '{field}' to a '{target}' value: {reason}")]
    Mapping {
        field: String,
        target: String,
        reason: String,
    },
}

impl MapError {
    /// Construct a conversion failure carrying field and target context.
    pub fn mapping(
        field: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Mapping {
            field: field.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Construct an illegal special-binding target error.
    pub fn invalid_semantics(
        model: impl Into<String>,
        property: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidSemantics {
            model: model.into(),
            property: property.into(),
            expected: expected.into(),
        }
    }

    #[must_use]
    pub const fn is_schema_not_found(&self) -> bool {
        matches!(self, Self::SchemaNotFound { .. })
    }

    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }
}

///
/// TESTS
///
