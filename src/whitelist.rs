//! Editor HTML -> database HTML.
//!
//! The [`Whitelister`] walks the parsed editor fragment and writes out only
//! what the active rules allow:
//!
//! - elements marked `data-embedtype` become opaque `<embed .../>` tags;
//! - `a` elements marked `data-linktype` have their attributes replaced by the
//!   link handler's output;
//! - every other element is kept with filtered attributes or unwrapped.

use std::collections::HashMap;
use std::sync::Arc;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, node::Node};

use crate::attributes::Attributes;
use crate::handlers::EntityHandler;
use crate::markup;
use crate::rules::{AttributeRule, Rule};

/// Elements allowed regardless of the active features.
const BASE_ELEMENTS: &[&str] = &["p", "div", "br"];

/// Converts HTML produced by the editor into the format stored in the
/// database, in which images, documents and linked pages are identified by
/// id rather than URL.
///
/// # Example
///
/// ```
/// use tinymce_richtext::Whitelister;
/// use tinymce_richtext::rules::{AttributeRule, Rule};
///
/// let whitelister = Whitelister::new(&[
///     Rule::whitelist("b", AttributeRule::without_attributes()),
/// ]);
/// let clean = whitelister.clean(r#"<div class="x"><b style="color:red">hi</b><font>there</font></div>"#);
/// assert_eq!(clean, "<p><b>hi</b>there</p>");
/// ```
pub struct Whitelister {
    element_rules: HashMap<String, AttributeRule>,
    embed_handlers: HashMap<String, Arc<dyn EntityHandler>>,
    link_handlers: HashMap<String, Arc<dyn EntityHandler>>,
}

impl Whitelister {
    /// Build a whitelister from a converter rule set.
    ///
    /// Later whitelist rules for the same element replace earlier ones.
    pub fn new(rules: &[Rule]) -> Self {
        let mut element_rules: HashMap<String, AttributeRule> = BASE_ELEMENTS
            .iter()
            .map(|name| (name.to_string(), AttributeRule::without_attributes()))
            .collect();
        let mut embed_handlers = HashMap::new();
        let mut link_handlers = HashMap::new();

        for rule in rules {
            match rule {
                Rule::Whitelist(r) => {
                    element_rules.insert(r.element.clone(), r.attributes.clone());
                }
                Rule::EmbedType(r) => {
                    embed_handlers.insert(r.embed_type.clone(), Arc::clone(&r.handler));
                }
                Rule::LinkType(r) => {
                    link_handlers.insert(r.link_type.clone(), Arc::clone(&r.handler));
                }
            }
        }

        tracing::trace!(
            elements = element_rules.len(),
            embeds = embed_handlers.len(),
            links = link_handlers.len(),
            "Built whitelister"
        );

        Self {
            element_rules,
            embed_handlers,
            link_handlers,
        }
    }

    /// Clean an editor HTML fragment, returning database HTML.
    pub fn clean(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut out = String::with_capacity(html.len());
        for child in fragment.root_element().children() {
            self.clean_node(child, &mut out);
        }
        out
    }

    fn clean_node(&self, node: NodeRef<'_, Node>, out: &mut String) {
        match node.value() {
            Node::Text(text) => markup::push_text(out, text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.clean_tag_node(element, out);
                }
            }
            // Comments, doctypes and processing instructions are dropped.
            _ => {}
        }
    }

    fn clean_children(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            self.clean_node(child, out);
        }
    }

    fn clean_tag_node(&self, element: ElementRef<'_>, out: &mut String) {
        let el = element.value();

        if let Some(embed_type) = el.attr("data-embedtype") {
            let Some(handler) = self.embed_handlers.get(embed_type) else {
                tracing::debug!("Discarding embed with unrecognised type {embed_type:?}");
                return;
            };
            let mut attrs = Attributes::new();
            attrs.insert("embedtype", embed_type);
            attrs.extend(
                handler
                    .db_attributes(el)
                    .iter()
                    .filter(|(name, _)| *name != "embedtype"),
            );
            markup::push_self_closing_tag(out, "embed", attrs.iter());
        } else if let Some(link_type) = el.attr("data-linktype").filter(|_| el.name() == "a") {
            let mut inner = String::new();
            self.clean_children(element, &mut inner);

            let Some(handler) = self.link_handlers.get(link_type) else {
                tracing::debug!("Unwrapping link with unrecognised type {link_type:?}");
                out.push_str(&inner);
                return;
            };
            let mut attrs = Attributes::new();
            attrs.insert("linktype", link_type);
            attrs.extend(
                handler
                    .db_attributes(el)
                    .iter()
                    .filter(|(name, _)| *name != "linktype"),
            );
            markup::push_start_tag(out, "a", attrs.iter());
            out.push_str(&inner);
            markup::push_end_tag(out, "a");
        } else {
            let name = match el.name() {
                "div" => "p",
                other => other,
            };
            let Some(rule) = self.element_rules.get(name) else {
                self.clean_children(element, out);
                return;
            };
            let attrs = rule.apply(el.attrs());
            markup::push_start_tag(out, name, attrs.iter());
            if markup::is_void(name) {
                return;
            }
            self.clean_children(element, out);
            markup::push_end_tag(out, name);
        }
    }
}
