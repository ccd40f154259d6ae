//! Image embeds and the rendering formats an editor can choose from.

use std::sync::Arc;

use scraper::node::Element;

use super::{ContentSource, EntityHandler};
use crate::attributes::Attributes;

/// A named way of rendering an image inside rich text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFormat {
    /// Value stored in `format` / `data-format`.
    pub name: String,
    /// CSS classes put on the rendered `<img>`.
    pub classnames: String,
    /// Rendition filter passed to [`ContentSource::image_rendition`].
    pub filter_spec: String,
}

impl ImageFormat {
    pub fn new(
        name: impl Into<String>,
        classnames: impl Into<String>,
        filter_spec: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            classnames: classnames.into(),
            filter_spec: filter_spec.into(),
        }
    }
}

/// The stock formats: full width, floated left, floated right.
pub fn default_image_formats() -> Vec<ImageFormat> {
    vec![
        ImageFormat::new("fullwidth", "richtext-image full-width", "width-800"),
        ImageFormat::new("left", "richtext-image left", "width-500"),
        ImageFormat::new("right", "richtext-image right", "width-500"),
    ]
}

/// Handler for `<img data-embedtype="image" ...>` embeds.
///
/// Stored form: `<embed embedtype="image" id=".." format=".." alt=".."/>`.
pub struct ImageEmbedHandler {
    source: Arc<dyn ContentSource>,
    formats: Vec<ImageFormat>,
}

impl ImageEmbedHandler {
    /// Create a handler using [`default_image_formats`].
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self::with_formats(source, default_image_formats())
    }

    pub fn with_formats(source: Arc<dyn ContentSource>, formats: Vec<ImageFormat>) -> Self {
        Self { source, formats }
    }

    /// Find a format by name, falling back to the first registered one.
    pub fn format(&self, name: &str) -> Option<&ImageFormat> {
        self.formats
            .iter()
            .find(|f| f.name == name)
            .or_else(|| self.formats.first())
    }
}

impl EntityHandler for ImageEmbedHandler {
    fn db_attributes(&self, element: &Element) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert_opt("id", element.attr("data-id"));
        attrs.insert_opt("format", element.attr("data-format"));
        attrs.insert_opt("alt", element.attr("data-alt"));
        attrs
    }

    fn editor_attributes(&self, stored: &Attributes) -> Attributes {
        let mut attrs = Attributes::new();
        let format_name = stored.get("format").unwrap_or_default();
        let (Some(id), Some(format)) = (stored.get("id"), self.format(format_name)) else {
            return attrs;
        };
        let Some(rendition) = self.source.image_rendition(id, &format.filter_spec) else {
            tracing::debug!("Image {id} not found, expanding to a bare <img>");
            return attrs;
        };

        let alt = stored.get("alt").unwrap_or_default();
        attrs.insert("data-embedtype", "image");
        attrs.insert("data-id", id);
        attrs.insert("data-format", format.name.as_str());
        attrs.insert("data-alt", alt);
        if !format.classnames.is_empty() {
            attrs.insert("class", format.classnames.as_str());
        }
        attrs.insert("alt", alt);
        attrs.insert("src", rendition.url);
        attrs.insert("width", rendition.width.to_string());
        attrs.insert("height", rendition.height.to_string());
        attrs
    }

    fn editor_element(&self) -> &str {
        "img"
    }
}
