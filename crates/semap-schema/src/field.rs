use crate::{
    METADATA_PATH_SEGMENT, PATH_SEPARATOR, XPATH_CONTENT_ROOT, XPATH_METADATA_ROOT,
    semantics::FieldSemantics,
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// SemanticSchemaField
///
/// One field definition node in a schema's field tree. `path` locates the
/// field from the schema root (`/Article/body/heading`); children represent
/// the fields of an embedded sub-schema. Whether a field is metadata is
/// carried by the path itself: metadata field paths start with the
/// `Metadata` segment.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SemanticSchemaField {
    pub name: String,
    pub path: String,

    #[serde(default)]
    pub is_multi_value: bool,

    #[serde(default)]
    pub semantics: Vec<FieldSemantics>,

    #[serde(default)]
    pub fields: Vec<SemanticSchemaField>,
}

impl SemanticSchemaField {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_multi_value: false,
            semantics: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_semantics(mut self, semantics: Vec<FieldSemantics>) -> Self {
        self.semantics = semantics;
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Self>) -> Self {
        self.fields = fields;
        self
    }

    /// Path split into non-empty segments; the first segment is the schema
    /// root element (or `Metadata`).
    #[must_use]
    pub fn path_segments(&self) -> Vec<&str> {
        self.path
            .split(PATH_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// True when the field lives under the schema's metadata part.
    #[must_use]
    pub fn is_metadata(&self) -> bool {
        self.path_segments().first() == Some(&METADATA_PATH_SEGMENT)
    }

    /// True when this field declares the given semantics itself.
    #[must_use]
    pub fn has_semantics(&self, semantics: &FieldSemantics) -> bool {
        self.semantics.contains(semantics)
    }

    /// Depth-first search of this field and its subtree for a field carrying
    /// the given semantics. Used when resolution is scoped to an embedded
    /// field rather than the whole schema.
    #[must_use]
    pub fn find_field_by_semantics(&self, semantics: &FieldSemantics) -> Option<&Self> {
        if self.has_semantics(semantics) {
            return Some(self);
        }
        self.fields
            .iter()
            .find_map(|f| f.find_field_by_semantics(semantics))
    }

    /// XPath of this field for in-context editing, optionally spliced into
    /// an indexed context XPath of an embedded value.
    ///
    /// The context XPath carries value indexes (`custom:body[2]`); the plain
    /// field XPath does not. When the field XPath extends the context (after
    /// stripping indexes), the indexed context replaces its unindexed
    /// prefix.
    #[must_use]
    pub fn xpath(&self, context_xpath: Option<&str>) -> String {
        let root = if self.is_metadata() {
            XPATH_METADATA_ROOT
        } else {
            XPATH_CONTENT_ROOT
        };

        let mut xpath = String::from(root);
        for segment in self.path_segments() {
            xpath.push_str("/custom:");
            xpath.push_str(segment);
        }

        let Some(context) = context_xpath.filter(|c| !c.is_empty()) else {
            return xpath;
        };

        let context_without_indexes = strip_indexes(context);
        if let Some(rest) = xpath.strip_prefix(context_without_indexes.as_str()) {
            format!("{context}{rest}")
        } else {
            // Context does not match this field's location; fall back to the
            // plain XPath rather than producing a bogus splice.
            xpath
        }
    }
}

impl fmt::Display for SemanticSchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

/// Remove `[n]` index predicates from an XPath.
fn strip_indexes(xpath: &str) -> String {
    let mut out = String::with_capacity(xpath.len());
    let mut chars = xpath.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '[' {
            let mut digits = String::new();
            let mut closed = false;
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == ']' {
                    closed = true;
                    break;
                }
                digits.push(next);
            }
            if closed && !digits.is_empty() && digits.chars().all(|d| d.is_ascii_digit()) {
                continue;
            }
            // Not a pure numeric predicate; keep it verbatim.
            out.push('[');
            out.push_str(&digits);
            if closed {
                out.push(']');
            }
        } else {
            out.push(c);
        }
    }
    out
}

///
/// TESTS
///
