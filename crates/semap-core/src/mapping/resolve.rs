use crate::{
    error::MapError,
    item::{Field, FieldSet},
    mapping::MappingData,
    model::SemanticEntity,
    semantics::{SemanticProperty, SemanticStore},
};
use semap_schema::{field::SemanticSchemaField, semantics::FieldSemantics};

///
/// ResolvedField
///
/// Outcome of resolving one semantic identifier: the concrete content field
/// when it carries data, and the schema field definition whenever the
/// identifier matched schema-wise (also when the published item has no data
/// for it, so provenance can still be recorded).
///

#[derive(Debug)]
pub struct ResolvedField<'a> {
    pub field: Option<&'a Field>,
    pub schema_field: Option<&'a SemanticSchemaField>,
}

impl ResolvedField<'_> {
    const fn none() -> Self {
        Self {
            field: None,
            schema_field: None,
        }
    }
}

/// The target type's (vocabulary, entity) declaration addressed by a
/// prefix, falling back to the inherited parent default for unprefixed
/// identifiers.
fn entity_data<'a>(prefix: &str, data: &MappingData<'a>) -> Option<&'a SemanticEntity> {
    let effective = match data.parent_default_prefix.as_deref() {
        Some(default) if prefix.is_empty() => default,
        _ => prefix,
    };
    data.entities.get(effective)
}

/// Order a property's declared bindings for one mapping pass.
///
/// Prefixed identifiers are kept only when their vocabulary's *primary*
/// entity in the schema matches the entity the target type declared for
/// that vocabulary; this binds properties to the semantically closest
/// entity rather than any entity sharing a vocabulary. Unprefixed
/// identifiers are always eligible but are appended last, regardless of
/// declaration order.
#[must_use]
pub fn filter_semantics(
    declared: &[SemanticProperty],
    data: &MappingData<'_>,
) -> Vec<SemanticProperty> {
    let mut eligible = Vec::with_capacity(declared.len());
    let mut defaults = Vec::new();

    for property in declared {
        if !property.has_prefix() {
            defaults.push(property.clone());
            continue;
        }
        let Some(entity) = entity_data(&property.prefix, data) else {
            continue;
        };
        if data.schema.primary_entity_name(&entity.vocab) == Some(entity.entity.as_str()) {
            eligible.push(property.clone());
        }
    }

    eligible.extend(defaults);
    eligible
}

/// Resolve one semantic identifier against the current mapping context.
///
/// Walks prefix → vocabulary → locale prefix → primary entity →
/// schema index, then descends the matched field's path by `embed_level`
/// segments through the content (or metadata) field-set. A matched field
/// with no values reports `(None, Some(schema field))` so the caller can
/// try the next identifier while keeping provenance.
pub fn resolve<'a>(
    store: &SemanticStore,
    data: &MappingData<'a>,
    property: &SemanticProperty,
) -> Result<ResolvedField<'a>, MapError> {
    let Some(entity) = entity_data(&property.prefix, data) else {
        return Ok(ResolvedField::none());
    };

    let Some(prefix) = store.prefix(&entity.vocab, data.locale) else {
        return Ok(ResolvedField::none());
    };

    let Some(entity_name) = data.schema.primary_entity_name(&entity.vocab) else {
        return Ok(ResolvedField::none());
    };

    let key = FieldSemantics::new(prefix, entity_name, property.property_name.clone());
    let schema_field = match data.embedded_schema_field {
        Some(scope) => scope.find_field_by_semantics(&key),
        None => data.schema.find_field_by_semantics(&key),
    };

    let Some(schema_field) = schema_field else {
        return Ok(ResolvedField::none());
    };

    let fields = if schema_field.is_metadata() && data.meta.is_some() {
        data.meta
    } else {
        data.content
    };

    let field = match fields {
        Some(fields) => extract_matched_field(schema_field, fields, data.embed_level)?,
        None => None,
    };

    // An empty field means "no data published", not "no match": report the
    // schema field alone so the next identifier gets a chance.
    let field = field.filter(|f| !f.is_empty());

    Ok(ResolvedField {
        field,
        schema_field: Some(schema_field),
    })
}

/// Descend a schema field's path against a field-set. The first path
/// segment is the schema root element; `embed_level` selects the segment
/// naming the field at the current nesting depth, and deeper paths flatten
/// through the first embedded value set.
fn extract_matched_field<'a>(
    schema_field: &SemanticSchemaField,
    fields: &'a FieldSet,
    embed_level: usize,
) -> Result<Option<&'a Field>, MapError> {
    let segments = schema_field.path_segments();
    if segments.len() < embed_level + 2 {
        return Err(MapError::PathTooShort {
            path: schema_field.path.clone(),
            embed_level,
        });
    }

    let Some(field) = fields.get(segments[embed_level + 1]) else {
        return Ok(None);
    };

    if segments.len() > embed_level + 2 {
        return match field.embedded_values.first() {
            Some(embedded) => extract_matched_field(schema_field, embedded, embed_level + 1),
            None => Ok(None),
        };
    }

    Ok(Some(field))
}

///
/// TESTS
///
