pub mod registry;
pub mod value;


pub use registry::{
    ModelDescriptor, ModelFactory, ModelRegistry, PropertyModel, PropertySetter, RegistryError,
    SemanticEntity, TargetKind,
};
pub use value::MappedValue;

use crate::error::MapError;
use std::{any::Any, collections::BTreeMap, fmt};

///
/// ModelKind
///
/// What role a registered model type plays. Media and link models get their
/// role data post-filled by the assembler; keyword models are the only
/// legal target of keyword recursion; `_self` bindings accept media and
/// link targets.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelKind {
    Entity,
    Media,
    Link,
    Keyword,
    Page,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Entity => "entity",
            Self::Media => "media",
            Self::Link => "link",
            Self::Keyword => "keyword",
            Self::Page => "page",
        };
        write!(f, "{label}")
    }
}

///
/// ModelBase
///
/// State shared by every view model: the framework-side identifier and the
/// per-property XPath provenance recorded for in-context editing.
///

#[derive(Clone, Debug, Default)]
pub struct ModelBase {
    pub id: Option<String>,
    pub xpm_property_metadata: BTreeMap<String, String>,
}

impl ModelBase {
    #[must_use]
    pub fn with_id(id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            xpm_property_metadata: BTreeMap::new(),
        }
    }
}

///
/// MediaData
///
/// Role data of media models, post-filled from the source item's
/// multimedia info.
///

#[derive(Clone, Debug, Default)]
pub struct MediaData {
    pub url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
}

///
/// LinkData
///
/// Role data of link models; the URL is resolved by the assembler when the
/// mapping itself left it unset.
///

#[derive(Clone, Debug, Default)]
pub struct LinkData {
    pub url: Option<String>,
}

///
/// KeywordData
///
/// Role data of keyword models, filled from the source keyword after any
/// metadata-schema mapping ran.
///

#[derive(Clone, Debug, Default)]
pub struct KeywordData {
    pub title: String,
    pub description: String,
    pub key: String,
    pub taxonomy_id: String,
}

///
/// ViewModel
///
/// A strongly-typed presentation model instance. Implementations embed a
/// `ModelBase` and opt into role data by overriding the matching accessor.
/// `impl_view_model!` writes the boilerplate.
///

pub trait ViewModel: Any + Send + fmt::Debug {
    fn type_tag(&self) -> &'static str;
    fn base(&self) -> &ModelBase;
    fn base_mut(&mut self) -> &mut ModelBase;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn media_mut(&mut self) -> Option<&mut MediaData> {
        None
    }

    fn link_mut(&mut self) -> Option<&mut LinkData> {
        None
    }

    fn keyword_mut(&mut self) -> Option<&mut KeywordData> {
        None
    }
}

/// Downcast a model trait object to its concrete type, as property setters
/// do. Failure means the registry and the setter disagree about the model
/// type, which registration-time validation rules out.
pub fn downcast_mut<T: ViewModel>(model: &mut dyn ViewModel) -> Result<&mut T, MapError> {
    let actual = model.type_tag();
    model
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or_else(|| MapError::ModelTypeMismatch {
            expected: std::any::type_name::<T>().to_string(),
            actual: actual.to_string(),
        })
}

///
/// impl_view_model
///
/// Implements the `ViewModel` boilerplate for a model struct with a `base:
/// ModelBase` field. Role variants also wire the role-data accessor:
///
/// ```ignore
/// impl_view_model!(Article, "Article");
/// impl_view_model!(Image, "Image", media);
/// ```
///

#[macro_export]
macro_rules! impl_view_model {
    (@common $tag:literal) => {
        fn type_tag(&self) -> &'static str {
            $tag
        }

        fn base(&self) -> &$crate::model::ModelBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut $crate::model::ModelBase {
            &mut self.base
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }

        fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
            self
        }
    };
    ($ty:ty, $tag:literal) => {
        impl $crate::model::ViewModel for $ty {
            $crate::impl_view_model!(@common $tag);
        }
    };
    ($ty:ty, $tag:literal, media) => {
        impl $crate::model::ViewModel for $ty {
            $crate::impl_view_model!(@common $tag);

            fn media_mut(&mut self) -> Option<&mut $crate::model::MediaData> {
                Some(&mut self.media)
            }
        }
    };
    ($ty:ty, $tag:literal, link) => {
        impl $crate::model::ViewModel for $ty {
            $crate::impl_view_model!(@common $tag);

            fn link_mut(&mut self) -> Option<&mut $crate::model::LinkData> {
                Some(&mut self.link)
            }
        }
    };
    ($ty:ty, $tag:literal, keyword) => {
        impl $crate::model::ViewModel for $ty {
            $crate::impl_view_model!(@common $tag);

            fn keyword_mut(&mut self) -> Option<&mut $crate::model::KeywordData> {
                Some(&mut self.keyword)
            }
        }
    };
}

///
/// Tag
///
/// Lightweight keyword projection: display text, key, and owning taxonomy.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tag {
    pub display_text: String,
    pub key: String,
    pub tag_category: String,
}

///
/// ExceptionEntity
///
/// Placeholder substituted for an entity whose mapping failed when building
/// a batch; carries the error so views can render diagnostics instead of
/// aborting the whole page.
///

#[derive(Debug, Default)]
pub struct ExceptionEntity {
    pub base: ModelBase,
    pub error_message: String,
}

impl ExceptionEntity {
    #[must_use]
    pub fn from_error(err: &MapError) -> Self {
        Self {
            base: ModelBase::default(),
            error_message: err.to_string(),
        }
    }
}

impl_view_model!(ExceptionEntity, "ExceptionEntity");
