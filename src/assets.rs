//! Stylesheet and script includes the admin page needs for the editor.

use html_escape::encode_quoted_attribute;

use crate::error::Result;
use crate::locale::to_locale;
use crate::markup;

/// Stylesheets, relative to the static root.
pub const CSS_FILES: &[&str] = &["wagtailtinymce/css/icons.css"];

/// Editor and chooser scripts, relative to the static root, in load order.
pub const JS_FILES: &[&str] = &[
    "wagtailtinymce/js/vendor/tinymce/jquery.tinymce.min.js",
    "wagtailtinymce/js/vendor/tinymce/tinymce.min.js",
    "wagtailtinymce/js/tinymce-editor.js",
    "wagtailadmin/js/page-chooser-modal.js",
    "wagtailimages/js/image-chooser-modal.js",
    "wagtaildocs/js/document-chooser-modal.js",
    "wagtailembeds/js/embed-chooser-modal.js",
];

const TINYMCE_BASE: &str = "wagtailtinymce/js/vendor/tinymce";

/// Encode a string for inline JavaScript: HTML-escaped, then JSON-quoted.
pub fn to_js_primitive(value: &str) -> Result<String> {
    Ok(serde_json::to_string(&encode_quoted_attribute(value))?)
}

/// An editor plugin registered with the client runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginScript {
    pub name: String,
    /// Plugin script, relative to the static root.
    pub script: String,
    /// `window.chooserUrls` entries the plugin reads, as `(key, url)`.
    pub chooser_urls: Vec<(String, String)>,
}

impl PluginScript {
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            chooser_urls: Vec::new(),
        }
    }

    pub fn chooser_url(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.chooser_urls.push((key.into(), url.into()));
        self
    }
}

/// Builds the `<link>` and `<script>` markup inserted into editor pages.
///
/// # Example
///
/// ```
/// use tinymce_richtext::{EditorAssets, PluginScript};
///
/// let mut assets = EditorAssets::new("/static/", "en-us");
/// assets.register_plugin(PluginScript::new(
///     "wagtaillink",
///     "wagtailtinymce/js/tinymce-plugins/wagtaillink.js",
/// ));
/// let js = assets.editor_js().unwrap();
/// assert!(js.contains(r#"registerMCEPlugin("wagtaillink", "/static/wagtailtinymce/js/tinymce-plugins/wagtaillink.js", "en_US");"#));
/// ```
#[derive(Clone, Debug)]
pub struct EditorAssets {
    static_url: String,
    locale: String,
    stylesheets: Vec<String>,
    plugins: Vec<PluginScript>,
}

impl EditorAssets {
    /// `static_url` is the prefix static paths are served under; `language`
    /// is the active language code, in either `pt-br` or `pt_BR` form.
    pub fn new(static_url: impl Into<String>, language: &str) -> Self {
        Self {
            static_url: static_url.into(),
            locale: to_locale(&language.replace('_', "-")),
            stylesheets: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Resolve a path relative to the static root.
    pub fn static_path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.static_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Add a plugin. Plugins are emitted in registration order; registering a
    /// name again replaces the earlier entry.
    pub fn register_plugin(&mut self, plugin: PluginScript) {
        self.plugins.retain(|p| p.name != plugin.name);
        self.plugins.push(plugin);
    }

    pub fn plugins(&self) -> &[PluginScript] {
        &self.plugins
    }

    /// Add a stylesheet, relative to the static root, linked after the
    /// built-in ones. Duplicates are ignored.
    pub fn register_stylesheet(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.stylesheets.contains(&path) {
            self.stylesheets.push(path);
        }
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Stylesheet includes: the icon sheet, then registered stylesheets.
    pub fn editor_css(&self) -> String {
        CSS_FILES
            .iter()
            .copied()
            .chain(self.stylesheets.iter().map(String::as_str))
            .map(|file| {
                let href = self.static_path(file);
                let mut tag = String::new();
                markup::push_start_tag(&mut tag, "link", [("rel", "stylesheet"), ("href", href.as_str())]);
                tag
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Preload script, editor scripts and plugin registrations.
    pub fn editor_js(&self) -> Result<String> {
        let mut out = format!(
            concat!(
                "<script>(function() {{",
                "    \"use strict\";",
                "    window.tinymce = window.tinymce || {{}};",
                "    window.tinymce.base = window.tinymce.baseURL = {};",
                "    window.tinymce.suffix = \"\";",
                "}}());</script>"
            ),
            to_js_primitive(&self.static_path(TINYMCE_BASE))?
        );

        let includes: Vec<String> = JS_FILES
            .iter()
            .map(|file| {
                let src = self.static_path(file);
                let mut tag = String::new();
                markup::push_start_tag(&mut tag, "script", [("src", src.as_str())]);
                markup::push_end_tag(&mut tag, "script");
                tag
            })
            .collect();
        out.push_str(&includes.join("\n"));

        for plugin in &self.plugins {
            out.push('\n');
            out.push_str(&self.plugin_js(plugin)?);
        }
        Ok(out)
    }

    fn plugin_js(&self, plugin: &PluginScript) -> Result<String> {
        let mut js = format!(
            "<script>registerMCEPlugin({}, {}, {});",
            serde_json::to_string(&plugin.name)?,
            to_js_primitive(&self.static_path(&plugin.script))?,
            to_js_primitive(&self.locale)?
        );
        for (key, url) in &plugin.chooser_urls {
            js.push_str(&format!(
                "window.chooserUrls.{key} = {};",
                to_js_primitive(url)?
            ));
        }
        js.push_str("</script>");
        Ok(js)
    }
}
