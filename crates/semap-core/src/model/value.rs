use crate::{
    model::{Tag, ViewModel},
    types::{DateTime, RichText},
};
use std::{collections::BTreeMap, fmt};

///
/// MappedValue
///
/// Output of the value coercer, handed to a property setter. The variant
/// matches the property's registered target shape; collection properties
/// always receive `List`.
///

pub enum MappedValue {
    Text(String),
    RichText(RichText),
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(DateTime),
    Tag(Tag),
    TextMap(BTreeMap<String, String>),
    Model(Box<dyn ViewModel>),
    List(Vec<MappedValue>),
}

impl MappedValue {
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_rich_text(self) -> Option<RichText> {
        match self {
            Self::RichText(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_bool(self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_float(self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_date(self) -> Option<DateTime> {
        match self {
            Self::Date(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_tag(self) -> Option<Tag> {
        match self {
            Self::Tag(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text_map(self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::TextMap(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_boxed_model(self) -> Option<Box<dyn ViewModel>> {
        match self {
            Self::Model(v) => Some(v),
            _ => None,
        }
    }

    /// Downcast a `Model` value to its concrete type.
    #[must_use]
    pub fn into_model<T: ViewModel>(self) -> Option<T> {
        self.into_boxed_model()?
            .into_any()
            .downcast::<T>()
            .ok()
            .map(|boxed| *boxed)
    }

    /// Elements of a `List` value; anything else is not a collection.
    #[must_use]
    pub fn into_list(self) -> Option<Vec<Self>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_text)
            .collect()
    }

    #[must_use]
    pub fn into_dates(self) -> Vec<DateTime> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_date)
            .collect()
    }

    #[must_use]
    pub fn into_ints(self) -> Vec<i64> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_int)
            .collect()
    }

    #[must_use]
    pub fn into_floats(self) -> Vec<f64> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_float)
            .collect()
    }

    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_tag)
            .collect()
    }

    #[must_use]
    pub fn into_models<T: ViewModel>(self) -> Vec<T> {
        self.into_list()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::into_model)
            .collect()
    }
}

impl fmt::Debug for MappedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::RichText(v) => f.debug_tuple("RichText").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Self::Tag(v) => f.debug_tuple("Tag").field(v).finish(),
            Self::TextMap(v) => f.debug_tuple("TextMap").field(v).finish(),
            Self::Model(v) => write!(f, "Model({})", v.type_tag()),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
        }
    }
}

///
/// TESTS
///
