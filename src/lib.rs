//! # tinymce_richtext
//!
//! TinyMCE integration for a CMS admin: conversion between the HTML the
//! editor produces and the restricted HTML stored in the database, plus the
//! widget, toolbar and asset glue around it.
//!
//! ## Overview
//!
//! Features contribute [`Rule`]s to a [`FeatureRegistry`]. A widget picks a
//! list of features and gets an [`EditorHtmlConverter`] built from their
//! rules:
//!
//! - on submit, a [`Whitelister`] keeps only allowed elements and attributes
//!   and turns `data-embedtype`/`data-linktype` markers into compact
//!   `<embed embedtype=".."/>` and `<a linktype="..">` tags;
//! - on render, a [`RewriterChain`] expands those compact tags back into the
//!   elements the editor needs, using each type's [`EntityHandler`].
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tinymce_richtext::{
//!     ContentSource, DocumentInfo, FeatureRegistry, PageInfo, Rendition, RichTextAreaBuilder,
//!     hooks,
//! };
//!
//! struct Cms;
//!
//! impl ContentSource for Cms {
//!     fn page(&self, id: &str) -> Option<PageInfo> {
//!         Some(PageInfo { id: id.into(), url: format!("/pages/{id}/"), parent_id: None })
//!     }
//!     fn document(&self, _id: &str) -> Option<DocumentInfo> { None }
//!     fn image_rendition(&self, _id: &str, _filter: &str) -> Option<Rendition> { None }
//! }
//!
//! let mut registry = FeatureRegistry::new();
//! hooks::register_tinymce_features(&mut registry, Arc::new(Cms));
//!
//! let widget = RichTextAreaBuilder::new(Arc::new(registry)).build().unwrap();
//! let stored = widget
//!     .converter()
//!     .to_database_format(r#"<a data-linktype="page" data-id="7" href="/pages/7/">Home</a>"#);
//! assert_eq!(stored, r#"<a linktype="page" id="7">Home</a>"#);
//! ```

pub mod assets;
pub mod attributes;
pub mod config;
pub mod converter;
pub mod error;
pub mod handlers;
pub mod hooks;
pub mod locale;
mod markup;
pub mod registry;
pub mod rewriter;
pub mod rules;
pub mod whitelist;
pub mod widget;

pub use assets::{EditorAssets, PluginScript};
pub use attributes::Attributes;
pub use config::RichTextAreaBuilder;
pub use converter::EditorHtmlConverter;
pub use error::{Result, RichTextError};
pub use handlers::{
    ContentSource, DocumentInfo, DocumentLinkHandler, EntityHandler, ImageEmbedHandler,
    ImageFormat, MediaEmbedHandler, PageInfo, PageLinkHandler, Rendition,
};
pub use registry::FeatureRegistry;
pub use rewriter::{EmbedRewriter, LinkRewriter, Rewriter, RewriterChain};
pub use rules::{AttributeRule, Rule};
pub use whitelist::Whitelister;
pub use widget::RichTextArea;
