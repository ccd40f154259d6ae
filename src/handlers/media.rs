//! Media embeds (video, audio and other oEmbed content).

use scraper::node::Element;

use super::EntityHandler;
use crate::attributes::Attributes;

/// Handler for `<div data-embedtype="media" data-url="..">` embeds.
///
/// Stored form: `<embed embedtype="media" url=".."/>`. The editor shows the
/// embed as a deletable block; the preview itself is fetched client-side.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaEmbedHandler;

impl EntityHandler for MediaEmbedHandler {
    fn db_attributes(&self, element: &Element) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_opt("url", element.attr("data-url"));
        attrs
    }

    fn editor_attributes(&self, stored: &Attributes) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(url) = stored.get("url") {
            attrs.insert("class", "rich-text-deletable");
            attrs.insert("data-embedtype", "media");
            attrs.insert("data-url", url);
        }
        attrs
    }

    fn editor_element(&self) -> &str {
        "div"
    }
}
