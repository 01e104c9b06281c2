use crate::{error::MapError, locale::Locale, types::{ItemId, RichText}};
use semap_schema::{schema::SchemaDef, semantics::Vocabulary};

///
/// SchemaProvider
///
/// Source of published semantic-mapping configuration: raw schema
/// definitions and the vocabulary table, per locale. Implementations load
/// from the delivery database or published JSON; the store layer owns
/// caching and index building.
///

pub trait SchemaProvider: Send + Sync {
    /// Published definition for a schema id, or `SchemaNotFound`.
    fn schema_def(&self, schema_id: &str, locale: &Locale) -> Result<SchemaDef, MapError>;

    /// Vocabulary prefix table for a locale.
    fn vocabularies(&self, locale: &Locale) -> Vec<Vocabulary>;
}

///
/// LinkResolver
///
/// Resolves a CMS item reference to a public URL. Returns `None` when the
/// item is unpublished or otherwise unlinkable.
///

pub trait LinkResolver: Send + Sync {
    fn resolve_link(&self, item_id: &ItemId) -> Option<String>;
}

///
/// RichTextProcessor
///
/// Post-processes raw XHTML markup from rich-text fields (link resolution,
/// namespace cleanup). The mapping core treats the output as opaque.
///

pub trait RichTextProcessor: Send + Sync {
    fn process(&self, raw: &str, locale: &Locale) -> RichText;
}
