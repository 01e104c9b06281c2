use crate::{
    field::SemanticSchemaField,
    semantics::{FieldSemantics, SchemaSemantics, Vocabulary},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

///
/// EntityNames
///
/// Derived mapping `vocabulary → ordered entity names`, built from a
/// schema's declared semantics. Ordering reflects declaration order; the
/// first entry per vocabulary is the primary entity used for match
/// eligibility.
///

pub type EntityNames = BTreeMap<String, Vec<String>>;

///
/// SchemaDef
///
/// The published (deserialized) shape of a semantic schema, before the
/// derived lookup state is built.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaDef {
    pub id: String,
    pub root_element: String,

    #[serde(default)]
    pub semantics: Vec<SchemaSemantics>,

    #[serde(default)]
    pub fields: Vec<SemanticSchemaField>,
}

///
/// SemanticSchema
///
/// An immutable, indexed semantic schema. Built once from its published
/// definition plus the locale's vocabulary table; cached by the caller per
/// (schema id, locale).
///
/// The semantic index is populated by walking the field tree once,
/// depth-first in declaration order, first match wins — so lookup is a pure
/// function of the `(prefix, entity, property)` key.
///

#[derive(Clone, Debug)]
pub struct SemanticSchema {
    id: String,
    root_element: String,
    semantics: Vec<SchemaSemantics>,
    fields: Vec<SemanticSchemaField>,

    entity_names: EntityNames,
    index: HashMap<FieldSemantics, Vec<usize>>,
}

impl SemanticSchema {
    #[must_use]
    pub fn build(def: SchemaDef, vocabularies: &[Vocabulary]) -> Self {
        let entity_names = derive_entity_names(&def.semantics, vocabularies);

        let mut index = HashMap::new();
        for (i, field) in def.fields.iter().enumerate() {
            index_field(field, vec![i], &mut index);
        }

        Self {
            id: def.id,
            root_element: def.root_element,
            semantics: def.semantics,
            fields: def.fields,
            entity_names,
            index,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn root_element(&self) -> &str {
        &self.root_element
    }

    #[must_use]
    pub fn semantics(&self) -> &[SchemaSemantics] {
        &self.semantics
    }

    #[must_use]
    pub fn fields(&self) -> &[SemanticSchemaField] {
        &self.fields
    }

    /// Derived `vocabulary → ordered entity names` table.
    #[must_use]
    pub const fn entity_names(&self) -> &EntityNames {
        &self.entity_names
    }

    /// The schema's primary (first-declared) entity for a vocabulary.
    #[must_use]
    pub fn primary_entity_name(&self, vocabulary: &str) -> Option<&str> {
        self.entity_names
            .get(vocabulary)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    /// Look up the field definition satisfying a semantic identifier.
    ///
    /// Pure function of the key: identical keys return the same field
    /// definition.
    #[must_use]
    pub fn find_field_by_semantics(
        &self,
        semantics: &FieldSemantics,
    ) -> Option<&SemanticSchemaField> {
        let path = self.index.get(semantics)?;
        let mut fields = &self.fields;
        let mut found = None;
        for &i in path {
            let field = fields.get(i)?;
            fields = &field.fields;
            found = Some(field);
        }
        found
    }
}

fn derive_entity_names(semantics: &[SchemaSemantics], vocabularies: &[Vocabulary]) -> EntityNames {
    let mut names = EntityNames::new();
    for s in semantics {
        let Some(vocab) = vocabularies
            .iter()
            .find(|v| v.prefix == s.prefix)
            .map(|v| v.vocab.clone())
        else {
            continue;
        };
        names.entry(vocab).or_default().push(s.entity.clone());
    }
    names
}

fn index_field(
    field: &SemanticSchemaField,
    tree_path: Vec<usize>,
    index: &mut HashMap<FieldSemantics, Vec<usize>>,
) {
    for semantics in &field.semantics {
        index
            .entry(semantics.clone())
            .or_insert_with(|| tree_path.clone());
    }
    for (i, child) in field.fields.iter().enumerate() {
        let mut child_path = tree_path.clone();
        child_path.push(i);
        index_field(child, child_path, index);
    }
}

///
/// TESTS
///
