use std::collections::HashMap;
use std::sync::Arc;

use scraper::node::Element;
use tinymce_richtext::{
    Attributes, ContentSource, DocumentInfo, DocumentLinkHandler, EditorAssets,
    EditorHtmlConverter, EntityHandler, FeatureRegistry, PageInfo, Rendition, RichTextAreaBuilder,
    RichTextError, Rule, hooks,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// In-memory CMS content: a small page tree, one document and one image.
struct MemoryContent {
    pages: HashMap<String, PageInfo>,
    documents: HashMap<String, DocumentInfo>,
    images: HashMap<String, (u32, u32)>,
}

impl MemoryContent {
    fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            "3".to_string(),
            PageInfo {
                id: "3".into(),
                url: "/".into(),
                parent_id: None,
            },
        );
        pages.insert(
            "7".to_string(),
            PageInfo {
                id: "7".into(),
                url: "/about/".into(),
                parent_id: Some("3".into()),
            },
        );

        let mut documents = HashMap::new();
        documents.insert(
            "9".to_string(),
            DocumentInfo {
                id: "9".into(),
                url: "/documents/9/report.pdf".into(),
            },
        );

        let mut images = HashMap::new();
        images.insert("4".to_string(), (500, 400));

        Self {
            pages,
            documents,
            images,
        }
    }
}

impl ContentSource for MemoryContent {
    fn page(&self, id: &str) -> Option<PageInfo> {
        self.pages.get(id).cloned()
    }

    fn document(&self, id: &str) -> Option<DocumentInfo> {
        self.documents.get(id).cloned()
    }

    fn image_rendition(&self, id: &str, filter_spec: &str) -> Option<Rendition> {
        let (width, height) = self.images.get(id)?;
        Some(Rendition {
            url: format!("/media/images/{id}.{filter_spec}.jpg"),
            width: *width,
            height: *height,
        })
    }
}

fn registry() -> Arc<FeatureRegistry> {
    let mut registry = FeatureRegistry::new();
    hooks::register_tinymce_features(&mut registry, Arc::new(MemoryContent::new()));
    Arc::new(registry)
}

fn converter() -> EditorHtmlConverter {
    EditorHtmlConverter::new(registry(), None)
}

// ---------------------------------------------------------------------------
// Editor -> database
// ---------------------------------------------------------------------------

#[test]
fn image_embed_is_stored_compactly() {
    let stored = converter().to_database_format(
        r#"<img data-embedtype="image" data-id="4" data-format="left" data-alt="cat">"#,
    );
    assert_eq!(stored, r#"<embed embedtype="image" id="4" format="left" alt="cat"/>"#);
}

#[test]
fn page_link_is_stored_by_id() {
    let stored =
        converter().to_database_format(r#"<a data-linktype="page" data-id="7">Home</a>"#);
    assert_eq!(stored, r#"<a linktype="page" id="7">Home</a>"#);
}

#[test]
fn unregistered_markers_are_dropped_or_unwrapped() {
    let converter = converter();
    assert_eq!(
        converter.to_database_format(r#"<img data-embedtype="poll" data-id="1">"#),
        ""
    );
    assert_eq!(
        converter.to_database_format(r#"<a data-linktype="event" data-id="1" href="/e/">Launch</a>"#),
        "Launch"
    );
}

#[test]
fn div_is_stored_as_paragraph() {
    let stored = converter().to_database_format("<div>Line <b>one</b></div><div>Line two</div>");
    assert_eq!(stored, "<p>Line <b>one</b></p><p>Line two</p>");
}

#[test]
fn table_attributes_are_restricted() {
    let stored = converter().to_database_format(concat!(
        r#"<table border="1" onclick="steal()" data-mce-selected="1">"#,
        r#"<caption id="c">Totals</caption>"#,
        r#"<tbody><tr style="height: 20px" bgcolor="red">"#,
        r#"<th scope="col" title="x">Year</th>"#,
        r#"<td colspan="2" rowspan="1" onmouseover="x()">2024</td>"#,
        r#"</tr></tbody></table>"#,
    ));
    assert_eq!(
        stored,
        concat!(
            r#"<table border="1"><caption>Totals</caption>"#,
            r#"<tbody><tr style="height: 20px">"#,
            r#"<th scope="col">Year</th>"#,
            r#"<td colspan="2" rowspan="1">2024</td>"#,
            r#"</tr></tbody></table>"#,
        )
    );
}

#[test]
fn disabled_features_are_unwrapped() {
    let converter =
        EditorHtmlConverter::new(registry(), Some(vec!["bold".into(), "link".into()]));
    let stored = converter.to_database_format(
        r#"<h2>Title</h2><p><b>x</b> <img data-embedtype="image" data-id="4" data-format="left" data-alt="">y</p>"#,
    );
    assert_eq!(stored, "Title<p><b>x</b> y</p>");
}

#[test]
fn sanitizing_clean_html_is_a_no_op() {
    let converter = converter();
    let clean = concat!(
        "<h2>News</h2>",
        r#"<p>Read <a href="https://example.com/">this</a> and <i>that</i>.</p>"#,
        "<ul><li>one</li><li>two<sub>2</sub></li></ul>",
        "<blockquote>quoted</blockquote><pre><code>let x = 1;</code></pre><hr>",
    );
    assert_eq!(converter.to_database_format(clean), clean);
}

#[test]
fn stored_markers_are_not_editor_input() {
    // Stored form must be expanded before it is cleaned again: without the
    // `data-` markers, typed links lose their type and embeds are dropped.
    let converter = converter();
    let stored = concat!(
        r#"<p><a linktype="page" id="7">Home</a></p>"#,
        r#"<embed embedtype="image" id="4" format="left" alt="cat"/>"#,
    );
    assert_eq!(converter.to_database_format(stored), "<p><a>Home</a></p>");

    let reloaded = converter.from_database_format(stored);
    assert_eq!(converter.to_database_format(&reloaded), stored);
}

#[test]
fn dangerous_markup_does_not_survive() {
    let stored = converter().to_database_format(concat!(
        r#"<p onclick="x()">a<script>alert(1)</script></p>"#,
        r#"<a href="javascript:alert(1)">b</a>"#,
        r#"<iframe src="https://evil.example/"></iframe>"#,
    ));
    assert!(!stored.contains("onclick"));
    assert!(!stored.contains("<script"));
    assert!(!stored.contains("javascript:"));
    assert!(!stored.contains("<iframe"));
}

// ---------------------------------------------------------------------------
// Database -> editor
// ---------------------------------------------------------------------------

#[test]
fn stored_page_link_is_expanded() {
    let editor = converter().from_database_format(r#"<p><a linktype="page" id="7">About</a></p>"#);
    assert_eq!(
        editor,
        r#"<p><a data-linktype="page" data-id="7" data-parent-id="3" href="/about/">About</a></p>"#
    );
}

#[test]
fn stored_document_link_is_expanded() {
    let editor =
        converter().from_database_format(r#"<a linktype="document" id="9">Annual report</a>"#);
    assert_eq!(
        editor,
        r#"<a data-linktype="document" data-id="9" href="/documents/9/report.pdf">Annual report</a>"#
    );
}

#[test]
fn stored_document_embed_gets_editor_markers() {
    let mut registry = FeatureRegistry::new();
    registry.register_converter_rule(
        "document-link",
        [Rule::embed_type(
            "document-link",
            DocumentLinkHandler::new(Arc::new(MemoryContent::new())),
        )],
    );
    let converter = EditorHtmlConverter::new(Arc::new(registry), None);
    let editor = converter.from_database_format(r#"<embed embedtype="document-link" id="9"/>"#);
    assert!(editor.contains(r#"data-linktype="document""#));
    assert!(editor.contains(r#"data-id="9""#));
    assert!(editor.contains(r#"href="/documents/9/report.pdf""#));
    assert!(!editor.contains("embedtype=\"document-link\""));
}

#[test]
fn stored_image_is_expanded_with_rendition() {
    let editor = converter()
        .from_database_format(r#"<embed embedtype="image" id="4" format="right" alt="A cat"/>"#);
    assert_eq!(
        editor,
        concat!(
            r#"<img data-embedtype="image" data-id="4" data-format="right" data-alt="A cat" "#,
            r#"class="richtext-image right" alt="A cat" src="/media/images/4.width-500.jpg" "#,
            r#"width="500" height="400">"#,
        )
    );
}

#[test]
fn unknown_types_pass_through_on_expand() {
    let stored = r#"<p><a linktype="event" id="1">x</a><embed embedtype="poll" id="2"/></p>"#;
    assert_eq!(converter().from_database_format(stored), stored);
}

#[test]
fn deleted_objects_expand_to_bare_elements() {
    let editor = converter().from_database_format(
        r#"<a linktype="page" id="404">Gone</a><embed embedtype="image" id="404" format="left" alt=""/>"#,
    );
    assert_eq!(editor, "<a>Gone</a><img>");
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn editor_markup_survives_a_round_trip() {
    let converter = converter();
    let editor = concat!(
        r#"<p>See <a data-linktype="page" data-id="7" data-parent-id="3" href="/about/">About</a></p>"#,
        r#"<img data-embedtype="image" data-id="4" data-format="left" data-alt="cat" "#,
        r#"class="richtext-image left" alt="cat" src="/media/images/4.width-500.jpg" width="500" height="400">"#,
    );
    let stored = converter.to_database_format(editor);
    assert_eq!(
        stored,
        concat!(
            r#"<p>See <a linktype="page" id="7">About</a></p>"#,
            r#"<embed embedtype="image" id="4" format="left" alt="cat"/>"#,
        )
    );
    assert_eq!(converter.from_database_format(&stored), editor);
}

#[test]
fn handler_round_trip_keeps_relevant_attributes() {
    let handler = DocumentLinkHandler::new(Arc::new(MemoryContent::new()));
    let fragment = scraper::Html::parse_fragment(
        r#"<a data-linktype="document" data-id="9" href="/documents/9/report.pdf">r</a>"#,
    );
    let selector = scraper::Selector::parse("a").unwrap();
    let element: &Element = fragment.select(&selector).next().unwrap().value();

    let stored = handler.db_attributes(element);
    let editor = handler.editor_attributes(&stored);
    for name in ["data-linktype", "data-id", "href"] {
        assert_eq!(editor.get(name), element.attr(name), "{name}");
    }
}

#[test]
fn custom_handler_can_be_registered() {
    struct EventLink;

    impl EntityHandler for EventLink {
        fn db_attributes(&self, element: &Element) -> Attributes {
            let mut attrs = Attributes::new();
            attrs.insert_opt("slug", element.attr("data-slug"));
            attrs
        }

        fn editor_attributes(&self, stored: &Attributes) -> Attributes {
            let mut attrs = Attributes::new();
            if let Some(slug) = stored.get("slug") {
                attrs.insert("data-linktype", "event");
                attrs.insert("data-slug", slug);
                attrs.insert("href", format!("/events/{slug}/"));
            }
            attrs
        }
    }

    let mut registry = FeatureRegistry::new();
    hooks::register_tinymce_features(&mut registry, Arc::new(MemoryContent::new()));
    registry.register_converter_rule("link", [Rule::link_type("event", EventLink)]);
    let converter = EditorHtmlConverter::new(Arc::new(registry), None);

    let stored = converter
        .to_database_format(r#"<a data-linktype="event" data-slug="launch" href="/events/launch/">Go</a>"#);
    assert_eq!(stored, r#"<a linktype="event" slug="launch">Go</a>"#);
    assert_eq!(
        converter.from_database_format(&stored),
        r#"<a data-linktype="event" data-slug="launch" href="/events/launch/">Go</a>"#
    );
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

#[test]
fn widget_cleans_submitted_value() {
    let widget = RichTextAreaBuilder::new(registry()).build().unwrap();
    let mut data = HashMap::new();
    data.insert(
        "body".to_string(),
        r#"<div><a data-linktype="page" data-id="7" href="/about/">About</a></div>"#.to_string(),
    );
    assert_eq!(
        widget.value_from_datadict(&data, "body").as_deref(),
        Some(r#"<p><a linktype="page" id="7">About</a></p>"#)
    );
}

#[test]
fn widget_renders_expanded_value_and_init_script() {
    let widget = RichTextAreaBuilder::new(registry())
        .buttons(vec![vec![vec!["bold", "italic"], vec!["link"]]])
        .language("en-gb")
        .features(vec!["bold", "link"])
        .build()
        .unwrap();
    let html = widget
        .render(
            "body",
            Some(r#"<p><a linktype="page" id="7">About</a></p>"#),
            &[("id", "id_body")],
        )
        .unwrap();

    assert!(html.starts_with(r#"<textarea name="body" cols="40" rows="10" id="id_body">"#));
    assert!(html.contains(
        "&lt;p&gt;&lt;a data-linktype=\"page\" data-id=\"7\" data-parent-id=\"3\" href=\"/about/\"&gt;About&lt;/a&gt;&lt;/p&gt;"
    ));
    assert!(html.contains(r#"<script>makeTinyMCEEditable("id_body", {"#));
    assert!(html.contains(r#""toolbar":["bold italic | link"]"#));
    assert!(html.contains(r#""language":"en""#));
    assert!(html.contains(r#""features":["bold","link"]"#));
    assert!(html.ends_with(");</script>"));
}

#[test]
fn widget_renders_empty_value() {
    let widget = RichTextAreaBuilder::new(registry()).build().unwrap();
    let html = widget.render("body", None, &[]).unwrap();
    assert!(html.starts_with("<textarea name=\"body\" cols=\"40\" rows=\"10\">\n</textarea>"));
    assert!(html.contains("makeTinyMCEEditable(null, "));
}

#[test]
fn widget_rejects_bad_toolbar() {
    let result = RichTextAreaBuilder::new(registry())
        .buttons(vec![vec![vec!["bold", "ita lic"]]])
        .build();
    assert!(matches!(result, Err(RichTextError::Config(msg)) if msg.contains("ita lic")));
}

#[test]
fn widget_is_shareable_across_threads() {
    let widget = Arc::new(RichTextAreaBuilder::new(registry()).build().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let widget = Arc::clone(&widget);
            std::thread::spawn(move || {
                widget
                    .converter()
                    .to_database_format(&format!("<div>{i}</div>"))
            })
        })
        .collect();
    let mut results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();
    assert_eq!(results, vec!["<p>0</p>", "<p>1</p>", "<p>2</p>", "<p>3</p>"]);
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[test]
fn assets_include_registered_plugins() {
    let mut assets = EditorAssets::new("/static/", "fr-ca");
    hooks::register_tinymce_plugins(&mut assets, "/admin/images/chooser/00000000/select_format/");
    let js = assets.editor_js().unwrap();
    for plugin in ["wagtailimage", "wagtailembeds", "wagtaillink", "wagtaildoclink"] {
        assert!(js.contains(&format!(r#"registerMCEPlugin("{plugin}", "#)), "{plugin}");
    }
    assert!(js.contains(r#""fr_CA");"#));
    assert!(js.contains("window.chooserUrls.imageChooserSelectFormat"));
}
