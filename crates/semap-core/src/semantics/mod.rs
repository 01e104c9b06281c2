mod store;

pub use store::SemanticStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Special property name binding the whole source item.
pub const SELF_PROPERTY: &str = "_self";

/// Special property name binding all fields as a string map.
pub const ALL_PROPERTY: &str = "_all";

///
/// SemanticProperty
///
/// One declared binding on a model property: `(prefix, property name)`.
/// An empty prefix addresses the default vocabulary; the property name may
/// be one of the special tokens `_self` / `_all`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SemanticProperty {
    pub prefix: String,
    pub property_name: String,
}

impl SemanticProperty {
    #[must_use]
    pub fn new(prefix: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            property_name: property_name.into(),
        }
    }

    /// Parse the compact `prefix:property` form; a bare `property` binds to
    /// the default vocabulary.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec.split_once(':') {
            Some((prefix, name)) => Self::new(prefix, name),
            None => Self::new("", spec),
        }
    }

    #[must_use]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    #[must_use]
    pub fn is_self(&self) -> bool {
        self.property_name == SELF_PROPERTY
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.property_name == ALL_PROPERTY
    }
}

impl fmt::Display for SemanticProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.property_name)
        } else {
            write!(f, "{}:{}", self.prefix, self.property_name)
        }
    }
}

///
/// TESTS
///
