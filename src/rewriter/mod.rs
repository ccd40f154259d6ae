//! Database HTML -> editor HTML.
//!
//! Rewriters implement the [`Rewriter`] trait and are composed into a
//! [`RewriterChain`] that runs them sequentially.
//!
//! Built-in rewriters:
//!
//! - [`LinkRewriter`] -- expands `<a linktype="..">` opening tags.
//! - [`EmbedRewriter`] -- expands `<embed embedtype=".."/>` tags.
//!
//! Each rewriter touches only the tags whose type it has a handler for and
//! leaves everything else, including unrecognised types, exactly as stored.

mod embed;
mod link;

pub use embed::EmbedRewriter;
pub use link::LinkRewriter;

use std::sync::LazyLock;

use regex::Regex;

use crate::attributes::Attributes;

static FIND_ATTRS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([\w-]+)="([^"]*)""#).expect("valid attribute pattern"));

/// Parse the `name="value"` pairs of a stored tag, decoding entities.
pub fn extract_attrs(attr_string: &str) -> Attributes {
    FIND_ATTRS
        .captures_iter(attr_string)
        .map(|caps| {
            let value = html_escape::decode_html_entities(&caps[2]).into_owned();
            (caps[1].to_string(), value)
        })
        .collect()
}

/// Expands one kind of stored tag into its editor form.
pub trait Rewriter: Send + Sync {
    fn rewrite(&self, html: &str) -> String;
}

/// Rewriters a converter applies to stored HTML before it reaches the
/// editor, links first and embeds second.
///
/// Rewriters match disjoint tags, so each sees the previous one's output
/// without re-expanding it.
#[derive(Default)]
pub struct RewriterChain {
    rewriters: Vec<Box<dyn Rewriter>>,
}

impl RewriterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rewriter: impl Rewriter + 'static) {
        self.rewriters.push(Box::new(rewriter));
    }

    /// Turn stored HTML into editor HTML. With no rewriters the input comes
    /// back unchanged.
    pub fn rewrite(&self, stored: &str) -> String {
        self.rewriters
            .iter()
            .fold(stored.to_owned(), |html, rewriter| rewriter.rewrite(&html))
    }

    pub fn is_empty(&self) -> bool {
        self.rewriters.is_empty()
    }
}
