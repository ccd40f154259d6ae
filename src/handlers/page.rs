//! Internal page links.

use std::sync::Arc;

use scraper::node::Element;

use super::{ContentSource, EntityHandler};
use crate::attributes::Attributes;

/// Handler for `<a data-linktype="page" data-id="..">` links.
///
/// Stored form: `<a linktype="page" id="..">`.
pub struct PageLinkHandler {
    source: Arc<dyn ContentSource>,
}

impl PageLinkHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }
}

impl EntityHandler for PageLinkHandler {
    fn db_attributes(&self, element: &Element) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_opt("id", element.attr("data-id"));
        attrs
    }

    fn editor_attributes(&self, stored: &Attributes) -> Attributes {
        let mut attrs = Attributes::new();
        let Some(page) = stored.get("id").and_then(|id| self.source.page(id)) else {
            return attrs;
        };
        attrs.insert("data-linktype", "page");
        attrs.insert("data-id", page.id);
        attrs.insert_opt("data-parent-id", page.parent_id);
        attrs.insert("href", page.url);
        attrs
    }
}
