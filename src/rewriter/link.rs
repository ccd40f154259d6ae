//! Expansion of stored typed links.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use super::{Rewriter, extract_attrs};
use crate::handlers::EntityHandler;
use crate::markup;

static FIND_A_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a(\b[^>]*)>").expect("valid link pattern"));

/// Rewriter that expands `<a linktype="T" ...>` opening tags using the link
/// handler registered for `T`.
///
/// Only the opening tag changes; link text and the closing tag are left as
/// stored. Links without a `linktype`, or with one that has no handler, pass
/// through unchanged.
pub struct LinkRewriter {
    handlers: HashMap<String, Arc<dyn EntityHandler>>,
}

impl LinkRewriter {
    pub fn new(handlers: HashMap<String, Arc<dyn EntityHandler>>) -> Self {
        Self { handlers }
    }

    fn replace_tag(&self, caps: &Captures) -> String {
        let attrs = extract_attrs(&caps[1]);
        let handler = attrs
            .get("linktype")
            .and_then(|link_type| self.handlers.get(link_type));
        let Some(handler) = handler else {
            return caps[0].to_string();
        };

        let mut out = String::new();
        markup::push_start_tag(&mut out, "a", handler.editor_attributes(&attrs).iter());
        out
    }
}

impl Rewriter for LinkRewriter {
    fn rewrite(&self, html: &str) -> String {
        FIND_A_TAG
            .replace_all(html, |caps: &Captures| self.replace_tag(caps))
            .into_owned()
    }
}
