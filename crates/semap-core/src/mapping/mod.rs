mod coerce;
mod data;
mod resolve;
mod strings;


pub use data::MappingData;
pub use resolve::{ResolvedField, filter_semantics, resolve};

use crate::{
    MAX_EMBED_DEPTH,
    error::MapError,
    item::{ContentItem, FieldSet},
    locale::Locale,
    model::{ExceptionEntity, ModelRegistry, ViewModel},
    semantics::SemanticStore,
    services::{LinkResolver, RichTextProcessor},
};
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, error};

///
/// ModelBuilder
///
/// The model assembler: orchestrates the registry, the semantic store, the
/// resolver, and the coercer to turn content items into view-model
/// instances. Stateless across calls; recursion threads an explicit depth
/// so a cyclic schema fails with `SchemaTooDeep` instead of overflowing.
///

pub struct ModelBuilder {
    registry: Arc<ModelRegistry>,
    store: Arc<SemanticStore>,
    links: Arc<dyn LinkResolver>,
    rich_text: Arc<dyn RichTextProcessor>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new(
        registry: Arc<ModelRegistry>,
        store: Arc<SemanticStore>,
        links: Arc<dyn LinkResolver>,
        rich_text: Arc<dyn RichTextProcessor>,
    ) -> Self {
        Self {
            registry,
            store,
            links,
            rich_text,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    #[must_use]
    pub fn store(&self) -> &SemanticStore {
        &self.store
    }

    pub(crate) fn link_resolver(&self) -> &dyn LinkResolver {
        self.links.as_ref()
    }

    pub(crate) fn rich_text_processor(&self) -> &dyn RichTextProcessor {
        self.rich_text.as_ref()
    }

    /// Map a whole content item to the registered target model type.
    ///
    /// Looks up the item's schema, assembles the mapping context, builds
    /// the model, then applies the item-level fills: identifier from the
    /// item id, multimedia info for media models, and a resolved URL for
    /// link models whose mapping left the URL unset.
    pub fn build_entity_model(
        &self,
        item: &ContentItem,
        target: &'static str,
        locale: &Locale,
    ) -> Result<Box<dyn ViewModel>, MapError> {
        self.build_entity_model_at(item, target, locale, 0)
    }

    /// Map a list of independent items, isolating failures: an item whose
    /// mapping fails is replaced by an `ExceptionEntity` carrying the error
    /// and the batch continues.
    #[must_use]
    pub fn build_entity_models(
        &self,
        items: &[ContentItem],
        target: &'static str,
        locale: &Locale,
    ) -> Vec<Box<dyn ViewModel>> {
        items
            .iter()
            .map(|item| match self.build_entity_model(item, target, locale) {
                Ok(model) => model,
                Err(err) => {
                    error!(item = %item.id, %err, "entity mapping failed; substituting exception entity");
                    let mut fallback = ExceptionEntity::from_error(&err);
                    fallback.base.id = Some(item.id.identifier().to_string());
                    Box::new(fallback) as Box<dyn ViewModel>
                }
            })
            .collect()
    }

    /// Map a standalone metadata field-set (page metadata, for instance) to
    /// a model type, with an explicit model identifier.
    pub fn build_metadata_model(
        &self,
        schema_id: &str,
        metadata: &FieldSet,
        target: &'static str,
        model_id: Option<&str>,
        locale: &Locale,
    ) -> Result<Box<dyn ViewModel>, MapError> {
        let schema = self.store.schema(schema_id, locale)?;
        let descriptor = self.registry.descriptor(target)?;

        let mut data = MappingData::new(target, &schema, descriptor.entities(), locale);
        data.meta = Some(metadata);
        data.model_id = model_id.map(str::to_string);

        self.build_at(&data, 0)
    }

    /// Build one view model from an assembled mapping context.
    pub fn build(&self, data: &MappingData<'_>) -> Result<Box<dyn ViewModel>, MapError> {
        self.build_at(data, 0)
    }

    pub(crate) fn build_entity_model_at(
        &self,
        item: &ContentItem,
        target: &'static str,
        locale: &Locale,
        depth: usize,
    ) -> Result<Box<dyn ViewModel>, MapError> {
        let schema = self.store.schema(item.schema_id.identifier(), locale)?;
        let descriptor = self.registry.descriptor(target)?;

        let mut data = MappingData::new(target, &schema, descriptor.entities(), locale);
        data.content = Some(&item.fields);
        data.meta = Some(&item.metadata);
        data.source = Some(item);

        let mut model = self.build_at(&data, depth)?;
        model.base_mut().id = Some(item.id.identifier().to_string());

        if let (Some(multimedia), Some(media)) = (&item.multimedia, model.media_mut()) {
            if !multimedia.url.is_empty() {
                media.url = Some(multimedia.url.clone());
                media.file_name = Some(multimedia.file_name.clone());
                media.file_size = Some(multimedia.size);
                media.mime_type = Some(multimedia.mime_type.clone());
            }
        }

        if let Some(link) = model.link_mut() {
            if link.url.as_deref().is_none_or(str::is_empty) {
                link.url = self.links.resolve_link(&item.id);
            }
        }

        Ok(model)
    }

    pub(crate) fn build_at(
        &self,
        data: &MappingData<'_>,
        depth: usize,
    ) -> Result<Box<dyn ViewModel>, MapError> {
        if depth > MAX_EMBED_DEPTH {
            return Err(MapError::SchemaTooDeep { depth });
        }

        let descriptor = self.registry.descriptor(data.target)?;
        let mut model = descriptor.instantiate(data.model_id.as_deref());
        let mut xpm_property_metadata = BTreeMap::new();

        for (index, property) in descriptor.properties().iter().enumerate() {
            let semantics = filter_semantics(descriptor.semantics_for(index), data);
            let mut field_xpath: Option<String> = None;
            let mut mapped = false;

            for semantic_property in &semantics {
                let resolved = resolve(&self.store, data, semantic_property)?;

                if let Some(field) = resolved.field {
                    let value =
                        self.coerce_field(field, property, data, resolved.schema_field, depth)?;
                    if let Some(value) = value {
                        (property.set)(model.as_mut(), value)?;
                    }
                    field_xpath = field.xpath.clone();
                    mapped = true;
                    break;
                }

                // Special bindings need the source item and apply only when
                // no field-based identifier matched so far.
                if let Some(source) = data.source {
                    if semantic_property.is_self() {
                        if let Some(value) = self.map_self(source, property, data, depth)? {
                            (property.set)(model.as_mut(), value)?;
                        }
                        mapped = true;
                        break;
                    }
                    if semantic_property.is_all() {
                        let value = self.map_all(source, property, data)?;
                        (property.set)(model.as_mut(), value)?;
                        mapped = true;
                        break;
                    }
                }

                if let Some(schema_field) = resolved.schema_field {
                    // The property maps to a schema field that carries no
                    // published data; record the computed XPath so editors
                    // can still address it.
                    mapped = true;
                    if field_xpath.is_none() {
                        field_xpath = Some(schema_field.xpath(data.context_xpath.as_deref()));
                    }
                }
            }

            if !mapped {
                debug!(
                    model = data.target,
                    property = property.name,
                    schema = data.schema.id(),
                    "property has no mappable field; leaving zero value"
                );
            }

            if let Some(xpath) = field_xpath {
                xpm_property_metadata.insert(property.name.to_string(), xpath);
            }
        }

        if data.locale.xpm_enabled {
            model.base_mut().xpm_property_metadata = xpm_property_metadata;
        }

        Ok(model)
    }
}
