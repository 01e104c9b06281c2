use crate::{
    error::MapError,
    model::{MappedValue, ModelKind, ViewModel},
    semantics::SemanticProperty,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Registration-time validation failures. These are development-time
/// errors; a registry that builds successfully cannot produce them at
/// mapping time.
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("model type '{model}' is registered twice")]
    DuplicateModel { model: String },

    #[error("model type '{model}' names unknown base '{base}'")]
    UnknownBase { model: String, base: String },

    #[error("model type '{model}' has a cyclic base chain")]
    BaseCycle { model: String },

    #[error("property {model}.{property} targets unregistered model type '{target}'")]
    UnknownTarget {
        model: String,
        property: String,
        target: String,
    },

    #[error("property {model}.{property} targets '{target}' which is not a keyword model")]
    InvalidKeywordTarget {
        model: String,
        property: String,
        target: String,
    },

    #[error("model type '{model}' is registered as {kind} but exposes no {kind} role data")]
    MissingRoleData { model: String, kind: ModelKind },
}

/// Instantiates a registered model, with or without an identifier.
pub type ModelFactory = fn(Option<&str>) -> Box<dyn ViewModel>;

/// Writes a coerced value into a model instance.
pub type PropertySetter = fn(&mut dyn ViewModel, MappedValue) -> Result<(), MapError>;

///
/// TargetKind
///
/// Target shape of a registered property (the scalar element shape for
/// collection properties).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetKind {
    Text,
    RichText,
    Bool,
    Int,
    Float,
    Date,
    Tag,
    /// A registered keyword-kind model type.
    Keyword(&'static str),
    /// A registered model type, reached through linked components or
    /// embedded fields.
    Entity(&'static str),
    /// String-keyed map of field values; only legal for `_all` bindings.
    TextMap,
}

impl TargetKind {
    /// Human-readable name used in mapping-error context.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Text => "string".to_string(),
            Self::RichText => "rich text".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::Date => "datetime".to_string(),
            Self::Tag => "tag".to_string(),
            Self::Keyword(tag) | Self::Entity(tag) => (*tag).to_string(),
            Self::TextMap => "string map".to_string(),
        }
    }
}

///
/// SemanticEntity
///
/// One vocabulary declaration on a model type: this model represents
/// `entity` in `vocab`, addressed by `prefix` in its property bindings.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticEntity {
    pub prefix: String,
    pub vocab: String,
    pub entity: String,
}

impl SemanticEntity {
    #[must_use]
    pub fn new(
        prefix: impl Into<String>,
        vocab: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            vocab: vocab.into(),
            entity: entity.into(),
        }
    }
}

///
/// PropertyModel
///
/// One registered property: name, target shape, cardinality, the ordered
/// semantic bindings declared on the property itself, and the setter that
/// writes a coerced value into the concrete struct.
///

#[derive(Debug)]
pub struct PropertyModel {
    pub name: &'static str,
    pub kind: TargetKind,
    pub multiple: bool,
    pub semantics: Vec<SemanticProperty>,
    pub set: PropertySetter,
}

impl PropertyModel {
    #[must_use]
    pub fn new(name: &'static str, kind: TargetKind, set: PropertySetter) -> Self {
        Self {
            name,
            kind,
            multiple: false,
            semantics: Vec::new(),
            set,
        }
    }

    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Declare the ordered semantic bindings in compact `prefix:property`
    /// form.
    #[must_use]
    pub fn semantics(mut self, specs: &[&str]) -> Self {
        self.semantics = specs.iter().map(|s| SemanticProperty::parse(s)).collect();
        self
    }
}

///
/// ModelDescriptor
///
/// Everything the assembler needs to know about one model type. Descriptors
/// are declared with the fluent constructors and finalized by
/// `ModelRegistryBuilder::build`, which resolves base-chain inheritance
/// into the merged entity table and per-property semantic lists.
///

#[derive(Debug)]
pub struct ModelDescriptor {
    tag: &'static str,
    kind: ModelKind,
    base: Option<&'static str>,
    factory: ModelFactory,
    entities: Vec<SemanticEntity>,
    properties: Vec<PropertyModel>,

    // derived at build
    merged_entities: BTreeMap<String, SemanticEntity>,
    merged_semantics: Vec<Vec<SemanticProperty>>,
}

impl ModelDescriptor {
    #[must_use]
    pub fn new(tag: &'static str, kind: ModelKind, factory: ModelFactory) -> Self {
        Self {
            tag,
            kind,
            base: None,
            factory,
            entities: Vec::new(),
            properties: Vec::new(),
            merged_entities: BTreeMap::new(),
            merged_semantics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_base(mut self, base: &'static str) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use]
    pub fn entity(mut self, prefix: &str, vocab: &str, entity: &str) -> Self {
        self.entities.push(SemanticEntity::new(prefix, vocab, entity));
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertyModel) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub const fn kind(&self) -> ModelKind {
        self.kind
    }

    #[must_use]
    pub fn instantiate(&self, id: Option<&str>) -> Box<dyn ViewModel> {
        (self.factory)(id)
    }

    /// Merged `prefix → (vocabulary, entity)` table; own declarations
    /// shadow inherited ones.
    #[must_use]
    pub const fn entities(&self) -> &BTreeMap<String, SemanticEntity> {
        &self.merged_entities
    }

    /// Own properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    /// Merged semantic bindings for the property at `index`: own bindings
    /// first, then same-named ancestor bindings, nearest ancestor first.
    #[must_use]
    pub fn semantics_for(&self, index: usize) -> &[SemanticProperty] {
        self.merged_semantics
            .get(index)
            .map_or(&[], Vec::as_slice)
    }
}

///
/// ModelRegistry
///
/// The statically-registered table of model types: the replacement for
/// runtime reflection. Built once at startup, immutable and shared
/// afterwards.
///

#[derive(Debug)]
pub struct ModelRegistry {
    models: BTreeMap<&'static str, ModelDescriptor>,
}

impl ModelRegistry {
    #[must_use]
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder { models: Vec::new() }
    }

    pub fn descriptor(&self, tag: &str) -> Result<&ModelDescriptor, MapError> {
        self.models
            .get(tag)
            .ok_or_else(|| MapError::ModelNotRegistered {
                model: tag.to_string(),
            })
    }

    /// Ordered property-name → semantic bindings table for a model type,
    /// inheritance resolved.
    pub fn property_semantics(
        &self,
        tag: &str,
    ) -> Result<Vec<(&'static str, &[SemanticProperty])>, MapError> {
        let descriptor = self.descriptor(tag)?;
        Ok(descriptor
            .properties()
            .iter()
            .enumerate()
            .map(|(index, property)| (property.name, descriptor.semantics_for(index)))
            .collect())
    }

    /// Merged `prefix → (vocabulary, entity)` table for a model type.
    pub fn entity_table(&self, tag: &str) -> Result<&BTreeMap<String, SemanticEntity>, MapError> {
        Ok(self.descriptor(tag)?.entities())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.models.contains_key(tag)
    }
}

///
/// ModelRegistryBuilder
///

pub struct ModelRegistryBuilder {
    models: Vec<ModelDescriptor>,
}

impl ModelRegistryBuilder {
    #[must_use]
    pub fn model(mut self, descriptor: ModelDescriptor) -> Self {
        self.models.push(descriptor);
        self
    }

    /// Validate the registered set and resolve inheritance.
    pub fn build(self) -> Result<ModelRegistry, RegistryError> {
        let mut models: BTreeMap<&'static str, ModelDescriptor> = BTreeMap::new();
        for descriptor in self.models {
            let tag = descriptor.tag;
            if models.insert(tag, descriptor).is_some() {
                return Err(RegistryError::DuplicateModel {
                    model: tag.to_string(),
                });
            }
        }

        for descriptor in models.values() {
            validate_descriptor(descriptor, &models)?;
        }

        // Inheritance resolution reads ancestor declarations, so compute
        // into a side table before applying.
        let mut derived: Vec<(&'static str, BTreeMap<String, SemanticEntity>, Vec<Vec<SemanticProperty>>)> =
            Vec::new();
        for descriptor in models.values() {
            let chain = base_chain(descriptor, &models)?;

            let mut entities = BTreeMap::new();
            for d in &chain {
                for entity in &d.entities {
                    entities
                        .entry(entity.prefix.clone())
                        .or_insert_with(|| entity.clone());
                }
            }

            let mut semantics = Vec::with_capacity(descriptor.properties.len());
            for property in &descriptor.properties {
                let mut merged = property.semantics.clone();
                for ancestor in chain.iter().skip(1) {
                    if let Some(inherited) =
                        ancestor.properties.iter().find(|p| p.name == property.name)
                    {
                        merged.extend(inherited.semantics.iter().cloned());
                    }
                }
                semantics.push(merged);
            }

            derived.push((descriptor.tag, entities, semantics));
        }

        for (tag, entities, semantics) in derived {
            let descriptor = models.get_mut(tag).expect("derived tag is registered");
            descriptor.merged_entities = entities;
            descriptor.merged_semantics = semantics;
        }

        let registry = ModelRegistry { models };
        validate_role_data(&registry)?;
        Ok(registry)
    }
}

/// The descriptor itself followed by its ancestors, nearest first.
fn base_chain<'a>(
    descriptor: &'a ModelDescriptor,
    models: &'a BTreeMap<&'static str, ModelDescriptor>,
) -> Result<Vec<&'a ModelDescriptor>, RegistryError> {
    let mut chain = vec![descriptor];
    let mut current = descriptor;
    while let Some(base_tag) = current.base {
        let base = models
            .get(base_tag)
            .ok_or_else(|| RegistryError::UnknownBase {
                model: current.tag.to_string(),
                base: base_tag.to_string(),
            })?;
        if chain.iter().any(|d| d.tag == base.tag) {
            return Err(RegistryError::BaseCycle {
                model: descriptor.tag.to_string(),
            });
        }
        chain.push(base);
        current = base;
    }
    Ok(chain)
}

fn validate_descriptor(
    descriptor: &ModelDescriptor,
    models: &BTreeMap<&'static str, ModelDescriptor>,
) -> Result<(), RegistryError> {
    for property in &descriptor.properties {
        match property.kind {
            TargetKind::Entity(target) => {
                if !models.contains_key(target) {
                    return Err(RegistryError::UnknownTarget {
                        model: descriptor.tag.to_string(),
                        property: property.name.to_string(),
                        target: target.to_string(),
                    });
                }
            }
            TargetKind::Keyword(target) => {
                let Some(target_descriptor) = models.get(target) else {
                    return Err(RegistryError::UnknownTarget {
                        model: descriptor.tag.to_string(),
                        property: property.name.to_string(),
                        target: target.to_string(),
                    });
                };
                if target_descriptor.kind != ModelKind::Keyword {
                    return Err(RegistryError::InvalidKeywordTarget {
                        model: descriptor.tag.to_string(),
                        property: property.name.to_string(),
                        target: target.to_string(),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Instantiate each model once and check that its role data matches its
/// declared kind, so post-fill and keyword recursion cannot miss at
/// mapping time.
fn validate_role_data(registry: &ModelRegistry) -> Result<(), RegistryError> {
    for descriptor in registry.models.values() {
        let mut probe = descriptor.instantiate(None);
        let present = match descriptor.kind {
            ModelKind::Media => probe.media_mut().is_some(),
            ModelKind::Link => probe.link_mut().is_some(),
            ModelKind::Keyword => probe.keyword_mut().is_some(),
            ModelKind::Entity | ModelKind::Page => true,
        };
        if !present {
            return Err(RegistryError::MissingRoleData {
                model: descriptor.tag.to_string(),
                kind: descriptor.kind,
            });
        }
    }
    Ok(())
}
