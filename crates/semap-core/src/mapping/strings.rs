use crate::{
    item::{ContentItem, Field, FieldKind},
    locale::Locale,
    mapping::ModelBuilder,
};
use std::collections::BTreeMap;

/// Embedded field whose name/value pairs are flattened into the `_all`
/// map instead of appearing under their own key.
const SETTINGS_FIELD: &str = "settings";

impl ModelBuilder {
    /// Stringify a field's values regardless of kind, in encounter order.
    /// Linked items contribute their identifiers; keywords their display
    /// text; rich text the processed markup.
    pub(crate) fn field_values_as_strings(&self, field: &Field, locale: &Locale) -> Vec<String> {
        match field.kind {
            FieldKind::Number => field
                .numeric_values
                .iter()
                .map(ToString::to_string)
                .collect(),

            FieldKind::Date => field.date_values.iter().map(ToString::to_string).collect(),

            FieldKind::ComponentLink | FieldKind::MultimediaLink => field
                .linked_items
                .iter()
                .map(|item| item.id.to_string())
                .collect(),

            FieldKind::Keyword => field
                .keywords
                .iter()
                .map(|kw| kw.display_text().to_string())
                .collect(),

            FieldKind::Xhtml => field
                .values
                .iter()
                .map(|raw| self.rich_text_processor().process(raw, locale).to_string())
                .collect(),

            FieldKind::Text | FieldKind::MultiLineText | FieldKind::ExternalLink
            | FieldKind::Embedded => field.values.clone(),
        }
    }

    /// Flatten an item's content and metadata fields into a
    /// field-name → first-string-value map, first value wins per name.
    ///
    /// The one unwrapping rule: an embedded `settings` field holding
    /// `name`/`value` sub-fields contributes its pairs directly, and the
    /// `settings` key itself is absent from the result.
    pub(crate) fn all_fields_as_map(
        &self,
        item: &ContentItem,
        locale: &Locale,
    ) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();

        for field in &item.fields {
            if values.contains_key(&field.name) {
                continue;
            }
            if field.name == SETTINGS_FIELD && field.kind == FieldKind::Embedded {
                for fieldset in &field.embedded_values {
                    let Some(key) = fieldset.get("name").and_then(Field::value) else {
                        continue;
                    };
                    let value = fieldset.get("value").and_then(Field::value).unwrap_or("");
                    values
                        .entry(key.to_string())
                        .or_insert_with(|| value.to_string());
                }
            } else if let Some(value) = self
                .field_values_as_strings(field, locale)
                .into_iter()
                .next()
            {
                values.insert(field.name.clone(), value);
            }
        }

        for field in &item.metadata {
            if values.contains_key(&field.name) {
                continue;
            }
            if let Some(value) = self
                .field_values_as_strings(field, locale)
                .into_iter()
                .next()
            {
                values.insert(field.name.clone(), value);
            }
        }

        values
    }
}
