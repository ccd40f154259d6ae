//! Expansion of stored embeds.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use super::{Rewriter, extract_attrs};
use crate::handlers::EntityHandler;
use crate::markup;

static FIND_EMBED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<embed(\b[^>]*?)/?>").expect("valid embed pattern"));

/// Rewriter that replaces `<embed embedtype="T" .../>` with the editor
/// element produced by the embed handler registered for `T`.
///
/// Embeds without a handler pass through unchanged so content saved under a
/// handler that is no longer installed is not destroyed.
pub struct EmbedRewriter {
    handlers: HashMap<String, Arc<dyn EntityHandler>>,
}

impl EmbedRewriter {
    pub fn new(handlers: HashMap<String, Arc<dyn EntityHandler>>) -> Self {
        Self { handlers }
    }

    fn replace_tag(&self, caps: &Captures) -> String {
        let attrs = extract_attrs(&caps[1]);
        let handler = attrs
            .get("embedtype")
            .and_then(|embed_type| self.handlers.get(embed_type));
        let Some(handler) = handler else {
            return caps[0].to_string();
        };

        let tag = handler.editor_element();
        let mut out = String::new();
        markup::push_start_tag(&mut out, tag, handler.editor_attributes(&attrs).iter());
        if !markup::is_void(tag) {
            markup::push_end_tag(&mut out, tag);
        }
        out
    }
}

impl Rewriter for EmbedRewriter {
    fn rewrite(&self, html: &str) -> String {
        FIND_EMBED_TAG
            .replace_all(html, |caps: &Captures| self.replace_tag(caps))
            .into_owned()
    }
}
