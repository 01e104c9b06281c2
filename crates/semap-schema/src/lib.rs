//! Semantic schema data model: the published description of a CMS content
//! schema, its field tree, and the RDFa-style semantics each field satisfies.
//!
//! Schemas arrive as published JSON configuration, are built once per
//! (schema id, locale), and are immutable afterwards. Lookup by semantics is
//! served from an index built while walking the field tree exactly once.

pub mod field;
pub mod schema;
pub mod semantics;

/// Separator used in semantic schema field paths (`/Article/body/heading`).
pub const PATH_SEPARATOR: char = '/';

/// Root of the XPath for content fields.
pub const XPATH_CONTENT_ROOT: &str = "tcm:Content";

/// Root of the XPath for metadata fields.
pub const XPATH_METADATA_ROOT: &str = "tcm:Metadata";

/// Path segment that marks a field (and its subtree) as metadata.
pub const METADATA_PATH_SEGMENT: &str = "Metadata";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        field::SemanticSchemaField,
        schema::{EntityNames, SchemaDef, SemanticSchema},
        semantics::{FieldSemantics, SchemaSemantics, Vocabulary},
    };
    pub use serde::{Deserialize, Serialize};
}
