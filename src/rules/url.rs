//! URL scheme check for link `href` attributes.

use std::sync::LazyLock;

use regex::Regex;

/// Schemes a stored link may use. Scheme-less URLs are always allowed.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "tel"];

static PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][-+.a-z0-9]*:").expect("valid protocol pattern"));

// Browsers skip these inside a scheme, so `jav\tascript:` still runs script.
static IGNORED_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[`\x00-\x20\x7f-\x{a0}\s\x{fffd}]+").expect("valid ignored-chars pattern")
});

/// Returns the URL unchanged when its scheme is allowed, `None` otherwise.
///
/// Used as an [`AttributeCheck::Filter`](super::AttributeCheck::Filter) on
/// `href`.
///
/// ```
/// use tinymce_richtext::rules::check_url;
///
/// assert_eq!(check_url("/about/").as_deref(), Some("/about/"));
/// assert_eq!(check_url("javascript:alert(1)"), None);
/// ```
pub fn check_url(url: &str) -> Option<String> {
    let unescaped = url
        .to_lowercase()
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    let unescaped = IGNORED_CHARS_RE.replace_all(&unescaped, "");

    if let Some(m) = PROTOCOL_RE.find(&unescaped) {
        let scheme = m.as_str().trim_end_matches(':');
        if !ALLOWED_URL_SCHEMES.contains(&scheme) {
            return None;
        }
    }
    Some(url.to_string())
}
