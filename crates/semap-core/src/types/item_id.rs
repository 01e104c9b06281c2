use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ItemId
///
/// CMS-native item identifier (`tcm:5-2084` or `tcm:5-123-16`). The middle
/// segment is the publication-independent item reference used as the
/// framework-side identifier.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The item-reference part of the URI (`tcm:5-2084` → `2084`). Falls
    /// back to the whole identifier when it is not URI-shaped.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or(&self.0)
    }

    /// Identifier combined with a template identifier, as used for
    /// dynamically published items (`2084-99`).
    #[must_use]
    pub fn identifier_with_template(&self, template: &Self) -> String {
        format!("{}-{}", self.identifier(), template.identifier())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

///
/// TESTS
///
