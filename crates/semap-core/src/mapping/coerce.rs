use crate::{
    error::MapError,
    item::{ContentItem, Field, FieldKind, FieldSet, Keyword},
    locale::Locale,
    mapping::{MappingData, ModelBuilder},
    model::{MappedValue, ModelKind, PropertyModel, Tag, TargetKind, ViewModel},
    types::{DateTime, ItemId},
};
use semap_schema::field::SemanticSchemaField;

impl ModelBuilder {
    /// Convert a resolved field's raw values into the property's target
    /// shape. Collection properties receive every value in encounter order;
    /// scalar properties take the first. Conversion failures never escape
    /// raw: they are wrapped with the field name and target type.
    pub(crate) fn coerce_field<'a>(
        &self,
        field: &'a Field,
        property: &PropertyModel,
        data: &MappingData<'a>,
        schema_field: Option<&'a SemanticSchemaField>,
        depth: usize,
    ) -> Result<Option<MappedValue>, MapError> {
        let target = property.kind;
        let mut values = Vec::new();

        match field.kind {
            FieldKind::Date => {
                for value in &field.date_values {
                    values.push(date_to_target(*value, target, field)?);
                }
            }

            FieldKind::Number => {
                for value in &field.numeric_values {
                    values.push(number_to_target(*value, target, field)?);
                }
            }

            FieldKind::ComponentLink | FieldKind::MultimediaLink => {
                for item in &field.linked_items {
                    if let Some(value) =
                        self.map_component(item, target, data.locale, depth, &field.name)?
                    {
                        values.push(value);
                    }
                }
            }

            FieldKind::Embedded => {
                let TargetKind::Entity(tag) = target else {
                    return Err(MapError::mapping(
                        &field.name,
                        target.name(),
                        "embedded fields map to registered entity models",
                    ));
                };
                let Some(schema_field) = schema_field else {
                    return Err(MapError::mapping(
                        &field.name,
                        target.name(),
                        "embedded field resolved without a schema field definition",
                    ));
                };
                let base_xpath = field
                    .xpath
                    .clone()
                    .unwrap_or_else(|| schema_field.xpath(data.context_xpath.as_deref()));
                for (index, fieldset) in field.embedded_values.iter().enumerate() {
                    let context_xpath = format!("{}[{}]", base_xpath, index + 1);
                    let model =
                        self.map_embedded(fieldset, tag, data, schema_field, context_xpath, depth)?;
                    values.push(MappedValue::Model(model));
                }
            }

            FieldKind::Keyword => {
                for keyword in &field.keywords {
                    values.push(self.map_keyword(
                        keyword,
                        target,
                        data.locale,
                        depth,
                        &field.name,
                    )?);
                }
            }

            FieldKind::Xhtml => {
                for raw in &field.values {
                    let processed = self.rich_text_processor().process(raw, data.locale);
                    values.push(match target {
                        TargetKind::Text => MappedValue::Text(processed.to_string()),
                        TargetKind::RichText => MappedValue::RichText(processed),
                        _ => {
                            return Err(MapError::mapping(
                                &field.name,
                                target.name(),
                                "rich text maps to string or rich-text targets",
                            ));
                        }
                    });
                }
            }

            FieldKind::Text | FieldKind::MultiLineText | FieldKind::ExternalLink => {
                for raw in &field.values {
                    values.push(string_to_target(raw, target, field)?);
                }
            }
        }

        if property.multiple {
            Ok(Some(MappedValue::List(values)))
        } else {
            Ok(values.into_iter().next())
        }
    }

    /// Map a linked (or source) item: a string target takes the resolved
    /// URL; an entity target recursively maps the item to its model.
    pub(crate) fn map_component(
        &self,
        item: &ContentItem,
        target: TargetKind,
        locale: &Locale,
        depth: usize,
        field_name: &str,
    ) -> Result<Option<MappedValue>, MapError> {
        match target {
            TargetKind::Text => Ok(self
                .link_resolver()
                .resolve_link(&item.id)
                .map(MappedValue::Text)),
            TargetKind::Entity(tag) => {
                let model = self.build_entity_model_at(item, tag, locale, depth + 1)?;
                Ok(Some(MappedValue::Model(model)))
            }
            _ => Err(MapError::mapping(
                field_name,
                target.name(),
                "linked items map to a string (resolved URL) or a registered entity model",
            )),
        }
    }

    /// Build a nested model from an embedded value set: embed level +1,
    /// fresh content field-set, inherited context.
    fn map_embedded<'a>(
        &self,
        fieldset: &'a FieldSet,
        tag: &'static str,
        data: &MappingData<'a>,
        schema_field: &'a SemanticSchemaField,
        context_xpath: String,
        depth: usize,
    ) -> Result<Box<dyn ViewModel>, MapError> {
        let embedded = MappingData {
            target: tag,
            content: Some(fieldset),
            meta: None,
            model_id: None,
            embedded_schema_field: Some(schema_field),
            embed_level: data.embed_level + 1,
            context_xpath: Some(context_xpath),
            ..data.clone()
        };
        self.build_at(&embedded, depth + 1)
    }

    /// Map a keyword value to its target shape.
    pub(crate) fn map_keyword(
        &self,
        keyword: &Keyword,
        target: TargetKind,
        locale: &Locale,
        depth: usize,
        field_name: &str,
    ) -> Result<MappedValue, MapError> {
        match target {
            TargetKind::Tag => Ok(MappedValue::Tag(Tag {
                display_text: keyword.display_text().to_string(),
                key: keyword.key_or_id().to_string(),
                tag_category: keyword.taxonomy_id.to_string(),
            })),

            TargetKind::Bool => {
                let raw = if keyword.key.is_empty() {
                    &keyword.title
                } else {
                    &keyword.key
                };
                parse_strict_bool(raw).map(MappedValue::Bool).ok_or_else(|| {
                    MapError::mapping(
                        field_name,
                        "bool",
                        format!("keyword value '{raw}' is not a boolean"),
                    )
                })
            }

            TargetKind::Text => Ok(MappedValue::Text(keyword.display_text().to_string())),

            TargetKind::Keyword(tag) => self.map_keyword_model(keyword, tag, locale, depth),

            _ => Err(MapError::mapping(
                field_name,
                target.name(),
                "keywords map to string, bool, tag, or keyword-model targets",
            )),
        }
    }

    /// Build a keyword model, running full model mapping against the
    /// keyword's metadata schema when it has one.
    fn map_keyword_model(
        &self,
        keyword: &Keyword,
        tag: &'static str,
        locale: &Locale,
        depth: usize,
    ) -> Result<MappedValue, MapError> {
        let descriptor = self.registry().descriptor(tag)?;

        let mut model = match keyword.metadata_schema_id() {
            Some(schema_ref) => {
                let schema_id = ItemId::new(schema_ref);
                let schema = self.store().schema(schema_id.identifier(), locale)?;

                let mut data = MappingData::new(tag, &schema, descriptor.entities(), locale);
                data.meta = Some(&keyword.metadata);
                self.build_at(&data, depth + 1)?
            }
            None => descriptor.instantiate(None),
        };

        model.base_mut().id = Some(keyword.id.identifier().to_string());
        if let Some(data) = model.keyword_mut() {
            data.title = keyword.title.clone();
            data.description = keyword.description.clone();
            data.key = keyword.key.clone();
            data.taxonomy_id = keyword.taxonomy_id.identifier().to_string();
        }

        Ok(MappedValue::Model(model))
    }

    /// `_self`: bind the source item itself. Only media, link, or string
    /// (resolved URL) targets are legal.
    pub(crate) fn map_self(
        &self,
        source: &ContentItem,
        property: &PropertyModel,
        data: &MappingData<'_>,
        depth: usize,
    ) -> Result<Option<MappedValue>, MapError> {
        let legal = match property.kind {
            TargetKind::Text => true,
            TargetKind::Entity(tag) => matches!(
                self.registry().descriptor(tag)?.kind(),
                ModelKind::Media | ModelKind::Link
            ),
            _ => false,
        };
        if !legal {
            return Err(MapError::invalid_semantics(
                data.target,
                property.name,
                "a media item, link, or string (resolved URL)",
            ));
        }

        let mapped = self.map_component(source, property.kind, data.locale, depth, property.name)?;
        Ok(mapped.map(|value| {
            if property.multiple {
                MappedValue::List(vec![value])
            } else {
                value
            }
        }))
    }

    /// `_all`: bind the flattened field-name → first-value map of the
    /// source item. Only a scalar string-map target is legal.
    pub(crate) fn map_all(
        &self,
        source: &ContentItem,
        property: &PropertyModel,
        data: &MappingData<'_>,
    ) -> Result<MappedValue, MapError> {
        if property.kind != TargetKind::TextMap || property.multiple {
            return Err(MapError::invalid_semantics(
                data.target,
                property.name,
                "a string-keyed map",
            ));
        }
        Ok(MappedValue::TextMap(
            self.all_fields_as_map(source, data.locale),
        ))
    }
}

fn date_to_target(
    value: DateTime,
    target: TargetKind,
    field: &Field,
) -> Result<MappedValue, MapError> {
    match target {
        TargetKind::Date => Ok(MappedValue::Date(value)),
        TargetKind::Text => Ok(MappedValue::Text(value.to_string())),
        _ => Err(MapError::mapping(
            &field.name,
            target.name(),
            "date fields map to datetime or string targets",
        )),
    }
}

fn number_to_target(
    value: f64,
    target: TargetKind,
    field: &Field,
) -> Result<MappedValue, MapError> {
    match target {
        TargetKind::Float => Ok(MappedValue::Float(value)),
        TargetKind::Int => rounded_int(value).map(MappedValue::Int).ok_or_else(|| {
            MapError::mapping(
                &field.name,
                "int",
                format!("numeric value {value} does not fit an integer"),
            )
        }),
        TargetKind::Text => Ok(MappedValue::Text(value.to_string())),
        _ => Err(MapError::mapping(
            &field.name,
            target.name(),
            "number fields map to numeric or string targets",
        )),
    }
}

fn string_to_target(raw: &str, target: TargetKind, field: &Field) -> Result<MappedValue, MapError> {
    match target {
        TargetKind::Text => Ok(MappedValue::Text(raw.to_string())),
        TargetKind::RichText => Ok(MappedValue::RichText(raw.into())),
        TargetKind::Bool => parse_strict_bool(raw).map(MappedValue::Bool).ok_or_else(|| {
            MapError::mapping(&field.name, "bool", format!("'{raw}' is not a boolean"))
        }),
        TargetKind::Int => raw.trim().parse::<i64>().map(MappedValue::Int).map_err(|e| {
            MapError::mapping(&field.name, "int", e.to_string())
        }),
        TargetKind::Float => raw
            .trim()
            .parse::<f64>()
            .map(MappedValue::Float)
            .map_err(|e| MapError::mapping(&field.name, "float", e.to_string())),
        TargetKind::Date => DateTime::parse(raw.trim()).map(MappedValue::Date).ok_or_else(|| {
            MapError::mapping(
                &field.name,
                "datetime",
                format!("'{raw}' is not an ISO datetime"),
            )
        }),
        _ => Err(MapError::mapping(
            &field.name,
            target.name(),
            "text fields map to scalar targets",
        )),
    }
}

/// Strict boolean parse: `true`/`false`/`1`/`0`, ASCII case-insensitive.
/// Anything else is a conversion failure, never a silent `false`.
fn parse_strict_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn rounded_int(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

///
/// TESTS
///
