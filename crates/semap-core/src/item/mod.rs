mod field;

pub use field::{Field, FieldKind, FieldSet};

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extension-data group holding framework-specific hints.
pub const FRAMEWORK_EXTENSION_GROUP: &str = "DXA";

/// Extension-data field naming a keyword's metadata schema.
pub const METADATA_SCHEMA_ID_FIELD: &str = "MetadataSchemaId";

///
/// Multimedia
///
/// Binary info attached to a multimedia component.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Multimedia {
    pub url: String,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
}

///
/// ContentItem
///
/// A CMS content item as materialized by the content source: identity,
/// schema reference, content and metadata field-sets, optional multimedia
/// info, and opaque extension data grouped by provider.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub schema_id: ItemId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub fields: FieldSet,

    #[serde(default)]
    pub metadata: FieldSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multimedia: Option<Multimedia>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extension_data: BTreeMap<String, FieldSet>,
}

impl ContentItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, schema_id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            schema_id: schema_id.into(),
            ..Default::default()
        }
    }
}

///
/// Keyword
///
/// A taxonomy keyword value. Display text prefers the description over the
/// title; the key falls back to the item identifier when unset. A keyword
/// may carry its own metadata fields governed by a metadata schema announced
/// through extension data.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Keyword {
    pub id: ItemId,
    pub taxonomy_id: ItemId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub metadata: FieldSet,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extension_data: BTreeMap<String, FieldSet>,
}

impl Keyword {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, taxonomy_id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            taxonomy_id: taxonomy_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: FieldSet) -> Self {
        self.metadata = metadata;
        self
    }

    /// Description when present, title otherwise.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.description.is_empty() {
            &self.title
        } else {
            &self.description
        }
    }

    /// Key when present, raw item identifier otherwise.
    #[must_use]
    pub fn key_or_id(&self) -> &str {
        if self.key.is_empty() {
            self.id.as_str()
        } else {
            &self.key
        }
    }

    /// Metadata schema id announced through the framework extension group.
    #[must_use]
    pub fn metadata_schema_id(&self) -> Option<&str> {
        self.extension_data
            .get(FRAMEWORK_EXTENSION_GROUP)?
            .get(METADATA_SCHEMA_ID_FIELD)?
            .value()
    }
}

///
/// TESTS
///
