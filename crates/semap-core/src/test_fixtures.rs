//! Synthetic schemas, items, models, and collaborator doubles shared by the
//! mapping tests.

use crate::{
    error::MapError,
    impl_view_model,
    item::{ContentItem, Field, FieldSet, Keyword, Multimedia},
    locale::Locale,
    mapping::ModelBuilder,
    model::{
        KeywordData, LinkData, MappedValue, MediaData, ModelBase, ModelDescriptor, ModelKind,
        ModelRegistry, PropertyModel, Tag, TargetKind, ViewModel, downcast_mut,
    },
    semantics::SemanticStore,
    services::{LinkResolver, RichTextProcessor, SchemaProvider},
    types::{DateTime, ItemId, RichText},
};
use semap_schema::{
    field::SemanticSchemaField,
    schema::SchemaDef,
    semantics::{CORE_VOCABULARY, FieldSemantics, SCHEMA_ORG_VOCABULARY, SchemaSemantics, Vocabulary},
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

pub fn locale() -> Locale {
    Locale::new("1033", "en-US").with_xpm()
}

// ---- collaborator doubles ----------------------------------------------

#[derive(Default)]
pub struct FixtureProvider;

impl SchemaProvider for FixtureProvider {
    fn schema_def(&self, schema_id: &str, _locale: &Locale) -> Result<SchemaDef, MapError> {
        match schema_id {
            "2084" => Ok(article_schema()),
            "77" => Ok(theme_meta_schema()),
            "3000" => Ok(teaser_schema()),
            "4000" => Ok(image_schema()),
            "5000" => Ok(call_to_action_schema()),
            _ => Err(MapError::SchemaNotFound {
                schema_id: schema_id.to_string(),
            }),
        }
    }

    fn vocabularies(&self, _locale: &Locale) -> Vec<Vocabulary> {
        vec![
            Vocabulary::new("tri", CORE_VOCABULARY),
            Vocabulary::new("s", SCHEMA_ORG_VOCABULARY),
        ]
    }
}

pub struct FixtureLinks;

impl LinkResolver for FixtureLinks {
    fn resolve_link(&self, item_id: &ItemId) -> Option<String> {
        if item_id.identifier() == "404" {
            None
        } else {
            Some(format!("/resolved/{}", item_id.identifier()))
        }
    }
}

#[derive(Default)]
pub struct FixtureRichText {
    pub calls: AtomicUsize,
}

impl RichTextProcessor for FixtureRichText {
    fn process(&self, raw: &str, _locale: &Locale) -> RichText {
        self.calls.fetch_add(1, Ordering::SeqCst);
        RichText::new(raw)
    }
}

pub fn builder() -> ModelBuilder {
    builder_with(Arc::new(FixtureRichText::default()))
}

pub fn builder_with(rich_text: Arc<FixtureRichText>) -> ModelBuilder {
    ModelBuilder::new(
        registry(),
        Arc::new(SemanticStore::new(Arc::new(FixtureProvider))),
        Arc::new(FixtureLinks),
        rich_text,
    )
}

// ---- schemas ------------------------------------------------------------

fn sem(prefix: &str, entity: &str, property: &str) -> FieldSemantics {
    FieldSemantics::new(prefix, entity, property)
}

fn field(name: &str, path: &str, semantics: Vec<FieldSemantics>) -> SemanticSchemaField {
    SemanticSchemaField::new(name, path).with_semantics(semantics)
}

fn article_schema() -> SchemaDef {
    SchemaDef {
        id: "2084".to_string(),
        root_element: "Article".to_string(),
        semantics: vec![
            SchemaSemantics::new("s", "Article"),
            SchemaSemantics::new("tri", "Article"),
        ],
        fields: vec![
            field("headline", "/Article/headline", vec![sem("s", "Article", "headline")]),
            field("title", "/Article/title", vec![sem("tri", "Article", "headline")]),
            field("summary", "/Article/summary", vec![sem("tri", "Article", "summary")]),
            field(
                "published",
                "/Article/published",
                vec![
                    sem("s", "Article", "datePublished"),
                    sem("tri", "Article", "published"),
                ],
            ),
            field("dates", "/Article/dates", vec![sem("tri", "Article", "dates")]),
            field("rating", "/Article/rating", vec![sem("tri", "Article", "rating")]),
            field("scores", "/Article/scores", vec![sem("tri", "Article", "scores")]),
            field(
                "image",
                "/Article/image",
                vec![sem("s", "Article", "image"), sem("tri", "Article", "image")],
            ),
            field("related", "/Article/related", vec![sem("tri", "Article", "related")]),
            field("topics", "/Article/topics", vec![sem("tri", "Article", "topics")]),
            field("flagged", "/Article/flagged", vec![sem("tri", "Article", "flagged")]),
            field("theme", "/Article/theme", vec![sem("tri", "Article", "theme")]),
            field("paragraphs", "/Article/paragraphs", vec![sem("tri", "Article", "paragraphs")])
                .with_fields(vec![
                    field(
                        "subheading",
                        "/Article/paragraphs/subheading",
                        vec![sem("tri", "Article", "subheading")],
                    ),
                    field(
                        "content",
                        "/Article/paragraphs/content",
                        vec![sem("tri", "Article", "content")],
                    ),
                ]),
            field(
                "standfirst",
                "/Metadata/standfirst",
                vec![sem("tri", "Article", "standfirst")],
            ),
        ],
    }
}

fn theme_meta_schema() -> SchemaDef {
    SchemaDef {
        id: "77".to_string(),
        root_element: "ThemeMeta".to_string(),
        semantics: vec![SchemaSemantics::new("tri", "ThemeKeyword")],
        fields: vec![field(
            "accent",
            "/Metadata/accent",
            vec![sem("tri", "ThemeKeyword", "accent")],
        )],
    }
}

fn teaser_schema() -> SchemaDef {
    SchemaDef {
        id: "3000".to_string(),
        root_element: "Teaser".to_string(),
        semantics: vec![SchemaSemantics::new("tri", "Teaser")],
        fields: vec![field("title", "/Teaser/title", vec![sem("tri", "Teaser", "title")])],
    }
}

fn image_schema() -> SchemaDef {
    SchemaDef {
        id: "4000".to_string(),
        root_element: "Image".to_string(),
        semantics: vec![SchemaSemantics::new("tri", "Image")],
        fields: vec![field(
            "altText",
            "/Image/altText",
            vec![sem("tri", "Image", "altText")],
        )],
    }
}

fn call_to_action_schema() -> SchemaDef {
    SchemaDef {
        id: "5000".to_string(),
        root_element: "CallToAction".to_string(),
        semantics: vec![SchemaSemantics::new("tri", "CallToAction")],
        fields: vec![field(
            "label",
            "/CallToAction/label",
            vec![sem("tri", "CallToAction", "label")],
        )],
    }
}

// ---- view models --------------------------------------------------------

#[derive(Debug, Default)]
pub struct Article {
    pub base: ModelBase,
    pub headline: Option<String>,
    pub summary: Option<RichText>,
    pub published: Option<DateTime>,
    pub history: Vec<DateTime>,
    pub rating: Option<i64>,
    pub scores: Vec<f64>,
    pub image: Option<Image>,
    pub related: Vec<String>,
    pub topics: Vec<Tag>,
    pub flagged: Option<bool>,
    pub theme: Option<ThemeKeyword>,
    pub paragraphs: Vec<Paragraph>,
    pub standfirst: Option<String>,
}

impl_view_model!(Article, "Article");

#[derive(Debug, Default)]
pub struct Paragraph {
    pub base: ModelBase,
    pub subheading: Option<String>,
    pub content: Option<RichText>,
}

impl_view_model!(Paragraph, "Paragraph");

#[derive(Debug, Default)]
pub struct Image {
    pub base: ModelBase,
    pub media: MediaData,
    pub alt_text: Option<String>,
}

impl_view_model!(Image, "Image", media);

#[derive(Debug, Default)]
pub struct ThemeKeyword {
    pub base: ModelBase,
    pub keyword: KeywordData,
    pub accent: Option<String>,
}

impl_view_model!(ThemeKeyword, "ThemeKeyword", keyword);

#[derive(Debug, Default)]
pub struct Teaser {
    pub base: ModelBase,
    pub title: Option<String>,
    pub url: Option<String>,
    pub media: Option<Image>,
    pub all: std::collections::BTreeMap<String, String>,
}

impl_view_model!(Teaser, "Teaser");

#[derive(Debug, Default)]
pub struct CallToAction {
    pub base: ModelBase,
    pub link: LinkData,
    pub label: Option<String>,
}

impl_view_model!(CallToAction, "CallToAction", link);

#[derive(Debug, Default)]
pub struct SelfMisuse {
    pub base: ModelBase,
    pub value: Option<i64>,
}

impl_view_model!(SelfMisuse, "SelfMisuse");

#[derive(Debug, Default)]
pub struct AllMisuse {
    pub base: ModelBase,
    pub value: Option<String>,
}

impl_view_model!(AllMisuse, "AllMisuse");

// ---- registry -----------------------------------------------------------

fn boxed<T: ViewModel + Default>(id: Option<&str>) -> Box<dyn ViewModel> {
    let mut model = T::default();
    model.base_mut().id = id.map(str::to_string);
    Box::new(model)
}

fn set<T, F>(model: &mut dyn ViewModel, value: MappedValue, apply: F) -> Result<(), MapError>
where
    T: ViewModel,
    F: FnOnce(&mut T, MappedValue),
{
    apply(downcast_mut::<T>(model)?, value);
    Ok(())
}

pub fn registry() -> Arc<ModelRegistry> {
    let registry = ModelRegistry::builder()
        .model(
            ModelDescriptor::new("Article", ModelKind::Entity, boxed::<Article>)
                .entity("s", SCHEMA_ORG_VOCABULARY, "Article")
                .entity("", CORE_VOCABULARY, "Article")
                .property(
                    PropertyModel::new("headline", TargetKind::Text, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.headline = v.into_text())
                    })
                    // Default-vocabulary binding declared first on purpose:
                    // the prefixed one must still win.
                    .semantics(&["headline", "s:headline"]),
                )
                .property(
                    PropertyModel::new("summary", TargetKind::RichText, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.summary = v.into_rich_text())
                    })
                    .semantics(&["summary"]),
                )
                .property(
                    PropertyModel::new("published", TargetKind::Date, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.published = v.into_date())
                    })
                    .semantics(&["s:datePublished", "published"]),
                )
                .property(
                    PropertyModel::new("history", TargetKind::Date, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.history = v.into_dates())
                    })
                    .multiple()
                    .semantics(&["dates"]),
                )
                .property(
                    PropertyModel::new("rating", TargetKind::Int, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.rating = v.into_int())
                    })
                    .semantics(&["rating"]),
                )
                .property(
                    PropertyModel::new("scores", TargetKind::Float, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.scores = v.into_floats())
                    })
                    .multiple()
                    .semantics(&["scores"]),
                )
                .property(
                    PropertyModel::new("image", TargetKind::Entity("Image"), |m, v| {
                        set::<Article, _>(m, v, |a, v| a.image = v.into_model())
                    })
                    .semantics(&["s:image", "image"]),
                )
                .property(
                    PropertyModel::new("related", TargetKind::Text, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.related = v.into_texts())
                    })
                    .multiple()
                    .semantics(&["related"]),
                )
                .property(
                    PropertyModel::new("topics", TargetKind::Tag, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.topics = v.into_tags())
                    })
                    .multiple()
                    .semantics(&["topics"]),
                )
                .property(
                    PropertyModel::new("flagged", TargetKind::Bool, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.flagged = v.into_bool())
                    })
                    .semantics(&["flagged"]),
                )
                .property(
                    PropertyModel::new("theme", TargetKind::Keyword("ThemeKeyword"), |m, v| {
                        set::<Article, _>(m, v, |a, v| a.theme = v.into_model())
                    })
                    .semantics(&["theme"]),
                )
                .property(
                    PropertyModel::new("paragraphs", TargetKind::Entity("Paragraph"), |m, v| {
                        set::<Article, _>(m, v, |a, v| a.paragraphs = v.into_models())
                    })
                    .multiple()
                    .semantics(&["paragraphs"]),
                )
                .property(
                    PropertyModel::new("standfirst", TargetKind::Text, |m, v| {
                        set::<Article, _>(m, v, |a, v| a.standfirst = v.into_text())
                    })
                    .semantics(&["standfirst"]),
                ),
        )
        .model(
            ModelDescriptor::new("Paragraph", ModelKind::Entity, boxed::<Paragraph>)
                .entity("", CORE_VOCABULARY, "Paragraph")
                .property(
                    PropertyModel::new("subheading", TargetKind::Text, |m, v| {
                        set::<Paragraph, _>(m, v, |p, v| p.subheading = v.into_text())
                    })
                    .semantics(&["subheading"]),
                )
                .property(
                    PropertyModel::new("content", TargetKind::RichText, |m, v| {
                        set::<Paragraph, _>(m, v, |p, v| p.content = v.into_rich_text())
                    })
                    .semantics(&["content"]),
                ),
        )
        .model(
            ModelDescriptor::new("Image", ModelKind::Media, boxed::<Image>)
                .entity("", CORE_VOCABULARY, "Image")
                .property(
                    PropertyModel::new("alt_text", TargetKind::Text, |m, v| {
                        set::<Image, _>(m, v, |i, v| i.alt_text = v.into_text())
                    })
                    .semantics(&["altText"]),
                ),
        )
        .model(
            ModelDescriptor::new("ThemeKeyword", ModelKind::Keyword, boxed::<ThemeKeyword>)
                .entity("", CORE_VOCABULARY, "ThemeKeyword")
                .property(
                    PropertyModel::new("accent", TargetKind::Text, |m, v| {
                        set::<ThemeKeyword, _>(m, v, |k, v| k.accent = v.into_text())
                    })
                    .semantics(&["accent"]),
                ),
        )
        .model(
            ModelDescriptor::new("Teaser", ModelKind::Entity, boxed::<Teaser>)
                .entity("", CORE_VOCABULARY, "Teaser")
                .property(
                    PropertyModel::new("title", TargetKind::Text, |m, v| {
                        set::<Teaser, _>(m, v, |t, v| t.title = v.into_text())
                    })
                    .semantics(&["title"]),
                )
                .property(
                    PropertyModel::new("url", TargetKind::Text, |m, v| {
                        set::<Teaser, _>(m, v, |t, v| t.url = v.into_text())
                    })
                    .semantics(&["_self"]),
                )
                .property(
                    PropertyModel::new("media", TargetKind::Entity("Image"), |m, v| {
                        set::<Teaser, _>(m, v, |t, v| t.media = v.into_model())
                    })
                    .semantics(&["_self"]),
                )
                .property(
                    PropertyModel::new("all", TargetKind::TextMap, |m, v| {
                        set::<Teaser, _>(m, v, |t, v| {
                            t.all = v.into_text_map().unwrap_or_default();
                        })
                    })
                    .semantics(&["_all"]),
                ),
        )
        .model(
            ModelDescriptor::new("CallToAction", ModelKind::Link, boxed::<CallToAction>)
                .entity("", CORE_VOCABULARY, "CallToAction")
                .property(
                    PropertyModel::new("label", TargetKind::Text, |m, v| {
                        set::<CallToAction, _>(m, v, |c, v| c.label = v.into_text())
                    })
                    .semantics(&["label"]),
                ),
        )
        .model(
            ModelDescriptor::new("SelfMisuse", ModelKind::Entity, boxed::<SelfMisuse>)
                .entity("", CORE_VOCABULARY, "SelfMisuse")
                .property(
                    PropertyModel::new("value", TargetKind::Int, |m, v| {
                        set::<SelfMisuse, _>(m, v, |s, v| s.value = v.into_int())
                    })
                    .semantics(&["_self"]),
                ),
        )
        .model(
            ModelDescriptor::new("AllMisuse", ModelKind::Entity, boxed::<AllMisuse>)
                .entity("", CORE_VOCABULARY, "AllMisuse")
                .property(
                    PropertyModel::new("value", TargetKind::Text, |m, v| {
                        set::<AllMisuse, _>(m, v, |a, v| a.value = v.into_text())
                    })
                    .semantics(&["_all"]),
                ),
        )
        .build()
        .expect("fixture registry is valid");
    Arc::new(registry)
}

// ---- items --------------------------------------------------------------

pub fn image_item() -> ContentItem {
    let mut item = ContentItem::new("tcm:5-456", "tcm:5-4000");
    item.title = "Hero image".to_string();
    item.multimedia = Some(Multimedia {
        url: "/media/hero.png".to_string(),
        file_name: "hero.png".to_string(),
        size: 12_345,
        mime_type: "image/png".to_string(),
    });
    item.fields
        .push(Field::text("altText", vec!["A hero image".to_string()]));
    item
}

pub fn theme_keyword() -> Keyword {
    let mut metadata = FieldSet::new();
    metadata.push(Field::text("accent", vec!["#ff6600".to_string()]));

    let mut extension = FieldSet::new();
    extension.push(Field::text("MetadataSchemaId", vec!["tcm:5-77".to_string()]));

    let mut keyword = Keyword::new("tcm:5-900", "tcm:5-100")
        .with_title("Citrus")
        .with_description("Citrus theme")
        .with_key("citrus")
        .with_metadata(metadata);
    keyword
        .extension_data
        .insert("DXA".to_string(), extension);
    keyword
}

pub fn article_item() -> ContentItem {
    let mut item = ContentItem::new("tcm:5-123", "tcm:5-2084");
    item.title = "Exclusive".to_string();

    let paragraph = |sub: &str, body: &str| -> FieldSet {
        vec![
            Field::text("subheading", vec![sub.to_string()]),
            Field::xhtml("content", vec![body.to_string()]),
        ]
        .into()
    };

    item.fields.push(
        Field::text("headline", vec!["Exclusive".to_string()])
            .with_xpath("tcm:Content/custom:Article/custom:headline"),
    );
    item.fields
        .push(Field::text("title", vec!["Fallback title".to_string()]));
    item.fields
        .push(Field::xhtml("summary", vec!["<p>Summary</p>".to_string()]));
    item.fields.push(Field::date(
        "published",
        vec![DateTime::parse("2024-01-01T00:00:00").unwrap()],
    ));
    item.fields.push(Field::date(
        "dates",
        vec![
            DateTime::parse("2024-01-01T00:00:00").unwrap(),
            DateTime::parse("2024-06-15T12:30:00").unwrap(),
        ],
    ));
    item.fields.push(Field::number("rating", vec![4.4]));
    item.fields.push(Field::number("scores", vec![1.5, 2.5]));
    item.fields
        .push(Field::multimedia_link("image", vec![image_item()]));
    item.fields.push(Field::component_link(
        "related",
        vec![ContentItem::new("tcm:5-789", "tcm:5-3000")],
    ));
    item.fields.push(Field::keyword(
        "topics",
        vec![
            Keyword::new("tcm:5-901", "tcm:5-100").with_title("News"),
            Keyword::new("tcm:5-902", "tcm:5-100")
                .with_title("Sport")
                .with_key("sport"),
        ],
    ));
    item.fields.push(Field::keyword(
        "flagged",
        vec![Keyword::new("tcm:5-903", "tcm:5-100").with_key("true")],
    ));
    item.fields
        .push(Field::keyword("theme", vec![theme_keyword()]));
    // The second paragraph has no content on purpose: its XPath can only
    // come from the schema field spliced into the indexed context.
    let second: FieldSet = vec![Field::text("subheading", vec!["Second".to_string()])].into();
    item.fields.push(
        Field::embedded(
            "paragraphs",
            vec![paragraph("First", "<p>one</p>"), second],
        )
        .with_xpath("tcm:Content/custom:Article/custom:paragraphs"),
    );

    item.metadata
        .push(Field::text("standfirst", vec!["Stand first".to_string()]));

    item
}

pub fn teaser_item() -> ContentItem {
    let mut item = ContentItem::new("tcm:5-321", "tcm:5-3000");
    item.title = "Teaser".to_string();
    item.multimedia = Some(Multimedia {
        url: "/media/teaser.jpg".to_string(),
        file_name: "teaser.jpg".to_string(),
        size: 999,
        mime_type: "image/jpeg".to_string(),
    });

    let settings_pair = |name: &str, value: &str| -> FieldSet {
        vec![
            Field::text("name", vec![name.to_string()]),
            Field::text("value", vec![value.to_string()]),
        ]
        .into()
    };

    item.fields
        .push(Field::text("title", vec!["x".to_string()]));
    item.fields.push(Field::embedded(
        "settings",
        vec![settings_pair("theme", "dark")],
    ));
    item.metadata
        .push(Field::text("channel", vec!["web".to_string()]));
    item
}
