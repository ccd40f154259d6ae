//! Document links.

use std::sync::Arc;

use scraper::node::Element;

use super::{ContentSource, EntityHandler};
use crate::attributes::Attributes;

/// Handler for `<a data-linktype="document" data-id="..">` links.
pub struct DocumentLinkHandler {
    source: Arc<dyn ContentSource>,
}

impl DocumentLinkHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }
}

impl EntityHandler for DocumentLinkHandler {
    fn db_attributes(&self, element: &Element) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_opt("id", element.attr("data-id"));
        attrs
    }

    fn editor_attributes(&self, stored: &Attributes) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(doc) = stored.get("id").and_then(|id| self.source.document(id)) {
            attrs.insert("data-linktype", "document");
            attrs.insert("data-id", doc.id);
            attrs.insert("href", doc.url);
        }
        attrs
    }
}
