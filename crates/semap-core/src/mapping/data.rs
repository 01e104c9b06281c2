use crate::{
    item::{ContentItem, FieldSet},
    locale::Locale,
    model::SemanticEntity,
};
use semap_schema::{field::SemanticSchemaField, schema::SemanticSchema};
use std::collections::BTreeMap;

///
/// MappingData
///
/// Per-invocation mapping context. Borrow-typed and cheap to clone: the
/// assembler clones it on every descent into embedded structures (embed
/// level +1) and never mutates a context shared across siblings, so
/// recursion is safe for concurrent use.
///

#[derive(Clone)]
pub struct MappingData<'a> {
    /// Registered tag of the model type being built.
    pub target: &'static str,

    /// Schema of the source item (or of the metadata being mapped).
    pub schema: &'a SemanticSchema,

    /// The target type's merged `prefix → (vocabulary, entity)` table.
    pub entities: &'a BTreeMap<String, SemanticEntity>,

    /// Content fields at the current embed level.
    pub content: Option<&'a FieldSet>,

    /// Metadata fields; cleared when descending into embedded values.
    pub meta: Option<&'a FieldSet>,

    /// The source item, when a whole item is being mapped. Enables the
    /// `_self` / `_all` special bindings.
    pub source: Option<&'a ContentItem>,

    /// Identifier handed to the model factory, when the caller supplies
    /// one.
    pub model_id: Option<String>,

    /// Scope for semantic lookup while inside an embedded field.
    pub embedded_schema_field: Option<&'a SemanticSchemaField>,

    /// Nesting depth within embedded fields; selects the schema-path
    /// segment that identifies a field at this level.
    pub embed_level: usize,

    /// Prefix inherited from the parent context for unprefixed semantic
    /// identifiers.
    pub parent_default_prefix: Option<String>,

    /// Indexed XPath of the embedded value being mapped, for provenance.
    pub context_xpath: Option<String>,

    pub locale: &'a Locale,
}

impl<'a> MappingData<'a> {
    #[must_use]
    pub fn new(
        target: &'static str,
        schema: &'a SemanticSchema,
        entities: &'a BTreeMap<String, SemanticEntity>,
        locale: &'a Locale,
    ) -> Self {
        Self {
            target,
            schema,
            entities,
            content: None,
            meta: None,
            source: None,
            model_id: None,
            embedded_schema_field: None,
            embed_level: 0,
            parent_default_prefix: None,
            context_xpath: None,
            locale,
        }
    }
}
