//! Conversion between editor HTML and database HTML for one feature set.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::handlers::EntityHandler;
use crate::registry::FeatureRegistry;
use crate::rewriter::{EmbedRewriter, LinkRewriter, RewriterChain};
use crate::rules::Rule;
use crate::whitelist::Whitelister;

/// Converts rich text between the editor's HTML and the stored format, using
/// the rules of a fixed list of features.
///
/// The converter rule set, the [`Whitelister`] and the [`RewriterChain`] are
/// each built on first use and then reused for the converter's lifetime.
pub struct EditorHtmlConverter {
    registry: Arc<FeatureRegistry>,
    features: Vec<String>,
    rules: OnceLock<Vec<Rule>>,
    whitelister: OnceLock<Whitelister>,
    rewriter: OnceLock<RewriterChain>,
}

impl EditorHtmlConverter {
    /// Create a converter for `features`, or for the registry's default
    /// features when `None`.
    pub fn new(registry: Arc<FeatureRegistry>, features: Option<Vec<String>>) -> Self {
        let features = features.unwrap_or_else(|| registry.default_features().to_vec());
        Self {
            registry,
            features,
            rules: OnceLock::new(),
            whitelister: OnceLock::new(),
            rewriter: OnceLock::new(),
        }
    }

    /// The features this converter was built for.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The rules of every feature, in feature order.
    pub fn converter_rules(&self) -> &[Rule] {
        self.rules.get_or_init(|| {
            let mut rules = Vec::new();
            for feature in &self.features {
                let contributed = self.registry.converter_rules(feature);
                if contributed.is_empty() {
                    tracing::debug!("Feature {feature:?} has no converter rules");
                }
                rules.extend_from_slice(contributed);
            }
            tracing::trace!(rules = rules.len(), "Built converter rule set");
            rules
        })
    }

    pub fn whitelister(&self) -> &Whitelister {
        self.whitelister
            .get_or_init(|| Whitelister::new(self.converter_rules()))
    }

    /// Link expansion runs before embed expansion.
    pub fn html_rewriter(&self) -> &RewriterChain {
        self.rewriter.get_or_init(|| {
            let mut embed_handlers: HashMap<String, Arc<dyn EntityHandler>> = HashMap::new();
            let mut link_handlers: HashMap<String, Arc<dyn EntityHandler>> = HashMap::new();
            for rule in self.converter_rules() {
                match rule {
                    Rule::EmbedType(r) => {
                        embed_handlers.insert(r.embed_type.clone(), Arc::clone(&r.handler));
                    }
                    Rule::LinkType(r) => {
                        link_handlers.insert(r.link_type.clone(), Arc::clone(&r.handler));
                    }
                    Rule::Whitelist(_) => {}
                }
            }

            let mut chain = RewriterChain::new();
            chain.add(LinkRewriter::new(link_handlers));
            chain.add(EmbedRewriter::new(embed_handlers));
            chain
        })
    }

    /// Editor HTML -> database HTML.
    pub fn to_database_format(&self, html: &str) -> String {
        self.whitelister().clean(html)
    }

    /// Database HTML -> editor HTML.
    pub fn from_database_format(&self, html: &str) -> String {
        self.html_rewriter().rewrite(html)
    }
}
