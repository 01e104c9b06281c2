//! Runtime mapping engine: content-source data model, view-model registry,
//! semantic field resolution, value coercion, and the model assembler.
//!
//! The flow per model: the assembler asks the resolver for a field per
//! property binding; the resolver consults the schema index and the
//! registry's semantics tables; matched fields pass through the coercer and
//! land in the freshly built model instance, with XPath provenance recorded
//! for in-context editing.

pub mod error;
pub mod item;
pub mod locale;
pub mod mapping;
pub mod model;
pub mod semantics;
pub mod services;
pub mod types;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Maximum nesting depth the assembler will recurse through (embedded
/// fields, linked components, keyword metadata). A cyclic schema reference
/// would otherwise recurse without bound; real schemas stay far below this.
pub const MAX_EMBED_DEPTH: usize = 16;

///
/// Prelude
///
/// Domain vocabulary only; services, registries, and the assembler are
/// imported from their modules.
///

pub mod prelude {
    pub use crate::{
        error::MapError,
        item::{ContentItem, Field, FieldKind, FieldSet, Keyword, Multimedia},
        locale::Locale,
        model::{ModelBase, ViewModel},
        semantics::SemanticProperty,
        types::{DateTime, ItemId, RichText},
    };
    pub use semap_schema::prelude::*;
}
