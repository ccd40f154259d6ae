//! Declarative conversion rules contributed by features.
//!
//! A feature bundles one or more [`Rule`]s:
//!
//! - whitelist rules keep an element and decide which of its attributes
//!   survive ([`AttributeRule`]);
//! - embed-type rules map a `data-embedtype` value to an
//!   [`EntityHandler`];
//! - link-type rules map a `data-linktype` value to an [`EntityHandler`].

mod url;

pub use self::url::{ALLOWED_URL_SCHEMES, check_url};

use std::fmt;
use std::sync::Arc;

use crate::attributes::Attributes;
use crate::handlers::EntityHandler;

/// What to do with one allowed attribute.
#[derive(Clone, Copy)]
pub enum AttributeCheck {
    /// Keep the value as is.
    Keep,
    /// Pass the value through a function; `None` drops the attribute.
    Filter(fn(&str) -> Option<String>),
}

impl fmt::Debug for AttributeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keep => f.write_str("Keep"),
            Self::Filter(_) => f.write_str("Filter(..)"),
        }
    }
}

/// The attributes a whitelisted element may carry.
///
/// # Example
///
/// ```
/// use tinymce_richtext::rules::{AttributeRule, check_url};
///
/// let rule = AttributeRule::without_attributes().with_check("href", check_url);
/// let kept = rule.apply([("href", "/about/"), ("onclick", "track()")]);
/// assert_eq!(kept.get("href"), Some("/about/"));
/// assert!(!kept.contains("onclick"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttributeRule {
    allowed: Vec<(String, AttributeCheck)>,
}

impl AttributeRule {
    /// A rule that strips every attribute.
    pub fn without_attributes() -> Self {
        Self::default()
    }

    /// A rule keeping the named attributes verbatim.
    pub fn allow<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: names
                .into_iter()
                .map(|name| (name.into(), AttributeCheck::Keep))
                .collect(),
        }
    }

    /// Also allow `name`, passing its value through `check`.
    pub fn with_check(mut self, name: impl Into<String>, check: fn(&str) -> Option<String>) -> Self {
        let name = name.into();
        self.allowed.retain(|(n, _)| *n != name);
        self.allowed.push((name, AttributeCheck::Filter(check)));
        self
    }

    /// Returns `true` if `name` may survive this rule.
    pub fn allows(&self, name: &str) -> bool {
        self.allowed.iter().any(|(n, _)| n == name)
    }

    /// Filter `attrs`, returning the survivors sorted by name.
    pub fn apply<'a>(&self, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Attributes {
        let mut kept: Vec<(&str, String)> = attrs
            .into_iter()
            .filter_map(|(name, value)| {
                let (_, check) = self.allowed.iter().find(|(n, _)| n == name)?;
                match check {
                    AttributeCheck::Keep => Some((name, value.to_string())),
                    AttributeCheck::Filter(f) => f(value).map(|v| (name, v)),
                }
            })
            .collect();
        kept.sort_by(|a, b| a.0.cmp(b.0));
        kept.into_iter().collect()
    }
}

/// Keep an element, filtering its attributes.
#[derive(Clone, Debug)]
pub struct WhitelistRule {
    pub element: String,
    pub attributes: AttributeRule,
}

/// Convert elements marked `data-embedtype="<embed_type>"`.
#[derive(Clone)]
pub struct EmbedTypeRule {
    pub embed_type: String,
    pub handler: Arc<dyn EntityHandler>,
}

/// Convert `a` elements marked `data-linktype="<link_type>"`.
#[derive(Clone)]
pub struct LinkTypeRule {
    pub link_type: String,
    pub handler: Arc<dyn EntityHandler>,
}

/// A single conversion rule.
#[derive(Clone)]
pub enum Rule {
    Whitelist(WhitelistRule),
    EmbedType(EmbedTypeRule),
    LinkType(LinkTypeRule),
}

impl Rule {
    pub fn whitelist(element: impl Into<String>, attributes: AttributeRule) -> Self {
        Self::Whitelist(WhitelistRule {
            element: element.into(),
            attributes,
        })
    }

    pub fn embed_type(embed_type: impl Into<String>, handler: impl EntityHandler + 'static) -> Self {
        Self::EmbedType(EmbedTypeRule {
            embed_type: embed_type.into(),
            handler: Arc::new(handler),
        })
    }

    pub fn link_type(link_type: impl Into<String>, handler: impl EntityHandler + 'static) -> Self {
        Self::LinkType(LinkTypeRule {
            link_type: link_type.into(),
            handler: Arc::new(handler),
        })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitelist(rule) => f.debug_tuple("Whitelist").field(rule).finish(),
            Self::EmbedType(rule) => f.debug_tuple("EmbedType").field(&rule.embed_type).finish(),
            Self::LinkType(rule) => f.debug_tuple("LinkType").field(&rule.link_type).finish(),
        }
    }
}
