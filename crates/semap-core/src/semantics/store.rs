use crate::{error::MapError, locale::Locale, services::SchemaProvider};
use semap_schema::{schema::SemanticSchema, semantics::Vocabulary};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::warn;

///
/// SemanticStore
///
/// Cached access to semantic schemas and vocabulary prefixes, keyed per
/// locale. Schemas are built once from their published definition and the
/// locale's vocabulary table, then shared.
///
/// Population is idempotent-compute-once: a cache miss computes outside the
/// lock and the first insert wins, so concurrent first access for the same
/// key converges on a single cached value.
///

pub struct SemanticStore {
    provider: Arc<dyn SchemaProvider>,
    schemas: RwLock<HashMap<(String, String), Arc<SemanticSchema>>>,
    vocabularies: RwLock<HashMap<String, Arc<Vec<Vocabulary>>>>,
}

impl SemanticStore {
    #[must_use]
    pub fn new(provider: Arc<dyn SchemaProvider>) -> Self {
        Self {
            provider,
            schemas: RwLock::new(HashMap::new()),
            vocabularies: RwLock::new(HashMap::new()),
        }
    }

    /// Vocabulary table for a locale.
    #[must_use]
    pub fn vocabularies(&self, locale: &Locale) -> Arc<Vec<Vocabulary>> {
        if let Some(hit) = self
            .vocabularies
            .read()
            .expect("vocabulary cache lock poisoned")
            .get(&locale.id)
        {
            return Arc::clone(hit);
        }

        let computed = Arc::new(self.provider.vocabularies(locale));

        let mut cache = self
            .vocabularies
            .write()
            .expect("vocabulary cache lock poisoned");
        Arc::clone(cache.entry(locale.id.clone()).or_insert(computed))
    }

    /// Registered prefix for a vocabulary in a locale.
    #[must_use]
    pub fn prefix(&self, vocab: &str, locale: &Locale) -> Option<String> {
        let vocabularies = self.vocabularies(locale);
        let prefix = vocabularies
            .iter()
            .find(|v| v.vocab == vocab)
            .map(|v| v.prefix.clone());

        if prefix.is_none() {
            warn!(vocab, locale = %locale, "no prefix registered for vocabulary");
        }
        prefix
    }

    /// Indexed semantic schema for a (schema id, locale), built on first
    /// access and cached for the process lifetime.
    pub fn schema(&self, schema_id: &str, locale: &Locale) -> Result<Arc<SemanticSchema>, MapError> {
        let key = (schema_id.to_string(), locale.id.clone());

        if let Some(hit) = self
            .schemas
            .read()
            .expect("schema cache lock poisoned")
            .get(&key)
        {
            return Ok(Arc::clone(hit));
        }

        let def = self.provider.schema_def(schema_id, locale)?;
        let vocabularies = self.vocabularies(locale);
        let built = Arc::new(SemanticSchema::build(def, &vocabularies));

        let mut cache = self.schemas.write().expect("schema cache lock poisoned");
        Ok(Arc::clone(cache.entry(key).or_insert(built)))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{FixtureProvider, locale};

    #[test]
    fn schema_lookups_share_one_cached_instance() {
        let store = SemanticStore::new(Arc::new(FixtureProvider::default()));
        let locale = locale();

        let first = store.schema("2084", &locale).unwrap();
        let second = store.schema("2084", &locale).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_schema_surfaces_schema_not_found() {
        let store = SemanticStore::new(Arc::new(FixtureProvider::default()));
        let err = store.schema("9999", &locale()).unwrap_err();
        assert!(err.is_schema_not_found());
    }

    #[test]
    fn prefix_resolves_through_locale_vocabularies() {
        let store = SemanticStore::new(Arc::new(FixtureProvider::default()));
        let locale = locale();

        assert_eq!(
            store.prefix("http://schema.org/", &locale),
            Some("s".to_string())
        );
        assert_eq!(store.prefix("http://nowhere.example/", &locale), None);
    }
}
