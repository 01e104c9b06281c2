use crate::{
    item::{ContentItem, Keyword},
    types::DateTime,
};
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// Type tag of a published content field. Exactly one of the field's value
/// lists corresponds to the tag; constructors enforce that the others stay
/// empty.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Text,
    MultiLineText,
    Xhtml,
    Keyword,
    Embedded,
    MultimediaLink,
    ComponentLink,
    ExternalLink,
    Number,
    Date,
}

///
/// Field
///
/// A materialized content field as delivered by the content source: a kind
/// tag, the value list matching that kind, and the source XPath used for
/// in-context editing provenance.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeric_values: Vec<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_values: Vec<DateTime>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_values: Vec<FieldSet>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_items: Vec<ContentItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<Keyword>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Text
    }
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new(name, FieldKind::Text)
        }
    }

    #[must_use]
    pub fn multi_line_text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new(name, FieldKind::MultiLineText)
        }
    }

    #[must_use]
    pub fn xhtml(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new(name, FieldKind::Xhtml)
        }
    }

    #[must_use]
    pub fn external_link(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new(name, FieldKind::ExternalLink)
        }
    }

    #[must_use]
    pub fn number(name: impl Into<String>, numeric_values: Vec<f64>) -> Self {
        Self {
            numeric_values,
            ..Self::new(name, FieldKind::Number)
        }
    }

    #[must_use]
    pub fn date(name: impl Into<String>, date_values: Vec<DateTime>) -> Self {
        Self {
            date_values,
            ..Self::new(name, FieldKind::Date)
        }
    }

    #[must_use]
    pub fn keyword(name: impl Into<String>, keywords: Vec<Keyword>) -> Self {
        Self {
            keywords,
            ..Self::new(name, FieldKind::Keyword)
        }
    }

    #[must_use]
    pub fn embedded(name: impl Into<String>, embedded_values: Vec<FieldSet>) -> Self {
        Self {
            embedded_values,
            ..Self::new(name, FieldKind::Embedded)
        }
    }

    #[must_use]
    pub fn component_link(name: impl Into<String>, linked_items: Vec<ContentItem>) -> Self {
        Self {
            linked_items,
            ..Self::new(name, FieldKind::ComponentLink)
        }
    }

    #[must_use]
    pub fn multimedia_link(name: impl Into<String>, linked_items: Vec<ContentItem>) -> Self {
        Self {
            linked_items,
            ..Self::new(name, FieldKind::MultimediaLink)
        }
    }

    #[must_use]
    pub fn with_xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    /// First plain value, when present.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// True when every value list is empty. An empty field is treated as
    /// "not found" during resolution so the next semantic identifier gets a
    /// chance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
            && self.numeric_values.is_empty()
            && self.date_values.is_empty()
            && self.embedded_values.is_empty()
            && self.linked_items.is_empty()
            && self.keywords.is_empty()
    }
}

///
/// FieldSet
///
/// Ordered, name-addressable collection of fields. Order is the published
/// order; first-wins lookups depend on it.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for FieldSet {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// TESTS
///
