//! Per-type handlers converting embeds and typed links between their editor
//! and database representations.
//!
//! A handler is registered under a type tag through an embed-type or
//! link-type [`Rule`](crate::rules::Rule). Built-in handlers:
//!
//! - [`PageLinkHandler`] -- `linktype="page"`.
//! - [`DocumentLinkHandler`] -- `linktype="document"`.
//! - [`ImageEmbedHandler`] -- `embedtype="image"`.
//! - [`MediaEmbedHandler`] -- `embedtype="media"`.
//!
//! Handlers that need CMS objects resolve them through a [`ContentSource`].

mod document;
mod image;
mod media;
mod page;

pub use document::DocumentLinkHandler;
pub use image::{ImageEmbedHandler, ImageFormat, default_image_formats};
pub use media::MediaEmbedHandler;
pub use page::PageLinkHandler;

use scraper::node::Element;

use crate::attributes::Attributes;

/// Conversion logic for one embed or link type.
///
/// Implementations must be `Send + Sync` so a rule set can be shared by
/// concurrent requests.
pub trait EntityHandler: Send + Sync {
    /// Attributes to store for an editor element, without the type tag.
    fn db_attributes(&self, element: &Element) -> Attributes;

    /// Attributes the editor needs for a stored element, including the
    /// `data-embedtype`/`data-linktype` markers.
    ///
    /// An empty result means the referenced object no longer exists.
    fn editor_attributes(&self, stored: &Attributes) -> Attributes;

    /// Element an expanded embed becomes in the editor. Links always expand
    /// to `a` and ignore this.
    fn editor_element(&self) -> &str {
        "a"
    }
}

/// A page as seen by the link handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub id: String,
    pub url: String,
    pub parent_id: Option<String>,
}

/// A document as seen by the link handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentInfo {
    pub id: String,
    pub url: String,
}

/// A rendered version of an image for a given filter spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendition {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Lookup of CMS objects referenced by stored HTML.
///
/// Implemented by the host application; the crate only reads through it.
pub trait ContentSource: Send + Sync {
    fn page(&self, id: &str) -> Option<PageInfo>;

    fn document(&self, id: &str) -> Option<DocumentInfo>;

    /// Render image `id` with `filter_spec` (e.g. `width-800`).
    fn image_rendition(&self, id: &str, filter_spec: &str) -> Option<Rendition>;
}
