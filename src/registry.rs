//! The feature registry: which rules each named feature contributes.

use std::collections::HashMap;

use crate::rules::Rule;

/// Features enabled by the CMS before any plugin extends the list.
pub const BASE_DEFAULT_FEATURES: &[&str] = &[
    "h2",
    "h3",
    "h4",
    "bold",
    "italic",
    "ol",
    "ul",
    "hr",
    "link",
    "document-link",
    "image",
    "embed",
];

/// Mapping from feature name to the [`Rule`]s it contributes.
///
/// Built once at startup (see [`hooks::register_tinymce_features`]) and then
/// shared read-only, usually behind an `Arc`.
///
/// [`hooks::register_tinymce_features`]: crate::hooks::register_tinymce_features
#[derive(Clone, Debug)]
pub struct FeatureRegistry {
    converter_rules: HashMap<String, Vec<Rule>>,
    default_features: Vec<String>,
}

impl FeatureRegistry {
    /// Create a registry with no rules and [`BASE_DEFAULT_FEATURES`] enabled
    /// by default.
    pub fn new() -> Self {
        Self {
            converter_rules: HashMap::new(),
            default_features: BASE_DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Append `rules` under `feature`.
    ///
    /// Registering the same feature again adds to its rules instead of
    /// replacing them, so independent plugins can extend a feature.
    pub fn register_converter_rule(
        &mut self,
        feature: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) {
        self.converter_rules
            .entry(feature.into())
            .or_default()
            .extend(rules);
    }

    /// The rules registered for `feature`, empty if there are none.
    pub fn converter_rules(&self, feature: &str) -> &[Rule] {
        self.converter_rules
            .get(feature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if any rule is registered for `feature`.
    pub fn has_feature(&self, feature: &str) -> bool {
        !self.converter_rules(feature).is_empty()
    }

    /// Features used when a widget does not choose its own.
    pub fn default_features(&self) -> &[String] {
        &self.default_features
    }

    /// Enable `feature` by default. Adding a feature twice is a no-op.
    pub fn add_default_feature(&mut self, feature: impl Into<String>) {
        let feature = feature.into();
        if !self.default_features.contains(&feature) {
            self.default_features.push(feature);
        }
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
