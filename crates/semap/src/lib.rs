//! semap — semantic content-model mapping from CMS items to strongly-typed
//! view models.
//!
//! ## Crate layout
//! - `core`: content-source data model, model registry, resolver, coercer,
//!   and the model assembler.
//! - `schema`: semantic schema data model and index.
//!
//! The `prelude` mirrors the vocabulary used when registering models and
//! driving the assembler.

pub use semap_core as core;
pub use semap_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use semap_core::impl_view_model;

///
/// Prelude
///

pub mod prelude {
    pub use semap_core::{
        MAX_EMBED_DEPTH,
        error::MapError,
        item::{ContentItem, Field, FieldKind, FieldSet, Keyword, Multimedia},
        locale::Locale,
        mapping::{MappingData, ModelBuilder},
        model::{
            KeywordData, LinkData, MappedValue, MediaData, ModelBase, ModelDescriptor, ModelKind,
            ModelRegistry, PropertyModel, Tag, TargetKind, ViewModel, downcast_mut,
        },
        semantics::{SemanticProperty, SemanticStore},
        services::{LinkResolver, RichTextProcessor, SchemaProvider},
        types::{DateTime, ItemId, RichText},
    };
    pub use semap_schema::prelude::*;
}
