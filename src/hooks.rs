//! Built-in feature and plugin registrations.
//!
//! Call these once at startup, before wrapping the registry in an `Arc`.
//! Other components add their own features the same way, through
//! [`FeatureRegistry::register_converter_rule`].

use std::sync::Arc;

use crate::assets::{EditorAssets, PluginScript};
use crate::handlers::{
    ContentSource, DocumentLinkHandler, ImageEmbedHandler, MediaEmbedHandler, PageLinkHandler,
};
use crate::registry::FeatureRegistry;
use crate::rules::{AttributeRule, Rule, check_url};

/// Style and layout attributes table elements may keep.
pub const TABLE_ATTRIBUTES: &[&str] = &[
    "border",
    "cellpadding",
    "cellspacing",
    "style",
    "width",
    "colspan",
    "margin-left",
    "margin-right",
    "height",
    "border-color",
    "text-align",
    "background-color",
    "vertical-align",
    "scope",
    "font-family",
    "rowspan",
    "valign",
    "class",
];

pub const TABLE_ELEMENTS: &[&str] = &["table", "caption", "tbody", "th", "tr", "td"];

fn plain(element: &str) -> Rule {
    Rule::whitelist(element, AttributeRule::without_attributes())
}

/// Register the editor's features: text formatting, headings, lists, tables,
/// page/document links, images and media embeds.
///
/// Also enables `subscripts`, `blockquote`, `code` and `table` by default.
pub fn register_tinymce_features(features: &mut FeatureRegistry, source: Arc<dyn ContentSource>) {
    features.register_converter_rule(
        "link",
        [
            Rule::whitelist("a", AttributeRule::without_attributes().with_check("href", check_url)),
            Rule::link_type("page", PageLinkHandler::new(Arc::clone(&source))),
        ],
    );
    features.register_converter_rule("bold", [plain("b"), plain("strong")]);
    features.register_converter_rule("br", [plain("br")]);
    features.register_converter_rule("div", [plain("div")]);
    features.register_converter_rule("italic", [plain("i"), plain("em")]);
    for heading in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        features.register_converter_rule(heading, [plain(heading)]);
    }
    features.register_converter_rule("hr", [plain("hr")]);
    features.register_converter_rule("ol", [plain("ol"), plain("li")]);
    features.register_converter_rule("ul", [plain("ul"), plain("li")]);
    features.register_converter_rule("p", [plain("p")]);
    features.register_converter_rule("subscripts", [plain("sub"), plain("sup")]);
    features.register_converter_rule("blockquote", [plain("blockquote")]);
    features.register_converter_rule("code", [plain("pre"), plain("code")]);
    features.register_converter_rule(
        "table",
        TABLE_ELEMENTS.iter().map(|element| {
            Rule::whitelist(*element, AttributeRule::allow(TABLE_ATTRIBUTES.iter().copied()))
        }),
    );

    features.register_converter_rule(
        "image",
        [Rule::embed_type("image", ImageEmbedHandler::new(Arc::clone(&source)))],
    );
    features.register_converter_rule(
        "document-link",
        [
            Rule::whitelist("a", AttributeRule::without_attributes().with_check("href", check_url)),
            Rule::link_type("document", DocumentLinkHandler::new(source)),
        ],
    );
    features.register_converter_rule("embed", [Rule::embed_type("media", MediaEmbedHandler)]);

    for feature in ["subscripts", "blockquote", "code", "table"] {
        features.add_default_feature(feature);
    }
}

/// Register the editor plugins for images, embeds, links and document links.
///
/// `image_select_format_url` is the image chooser's format-selection URL with
/// `00000000` standing in for the image id.
pub fn register_tinymce_plugins(assets: &mut EditorAssets, image_select_format_url: &str) {
    assets.register_plugin(
        PluginScript::new("wagtailimage", "wagtailtinymce/js/tinymce-plugins/wagtailimage.js")
            .chooser_url("imageChooserSelectFormat", image_select_format_url),
    );
    assets.register_plugin(PluginScript::new(
        "wagtailembeds",
        "wagtailtinymce/js/tinymce-plugins/wagtailembeds.js",
    ));
    assets.register_plugin(PluginScript::new(
        "wagtaillink",
        "wagtailtinymce/js/tinymce-plugins/wagtaillink.js",
    ));
    assets.register_plugin(PluginScript::new(
        "wagtaildoclink",
        "wagtailtinymce/js/tinymce-plugins/wagtaildoclink.js",
    ));
}
