//! Builder for configuring a [`RichTextArea`] widget.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::converter::EditorHtmlConverter;
use crate::error::{Result, RichTextError};
use crate::locale::to_locale;
use crate::registry::FeatureRegistry;
use crate::widget::RichTextArea;

/// Toolbar used when none is configured: one row of button groups.
pub const DEFAULT_BUTTONS: &[&[&str]] = &[
    &["undo", "redo"],
    &["styleselect"],
    &["bold", "italic"],
    &["bullist", "numlist", "outdent", "indent"],
    &["table"],
    &["link", "unlink"],
    &["wagtaildoclink", "wagtailimage", "wagtailembed"],
    &["pastetext", "fullscreen"],
];

/// Builder for a [`RichTextArea`].
///
/// Provides a fluent API for the toolbar layout, menu bar, editor options,
/// language and the features whose rules drive HTML conversion.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tinymce_richtext::{FeatureRegistry, RichTextAreaBuilder};
///
/// let registry = Arc::new(FeatureRegistry::new());
/// let widget = RichTextAreaBuilder::new(registry)
///     .buttons(vec![vec![vec!["bold", "italic"], vec!["link", "unlink"]]])
///     .menus(vec!["edit", "insert"])
///     .option("height", 400)
///     .language("de")
///     .features(vec!["bold", "italic", "link"])
///     .build()
///     .unwrap();
/// assert_eq!(widget.features(), ["bold", "italic", "link"]);
/// ```
pub struct RichTextAreaBuilder {
    registry: Arc<FeatureRegistry>,
    buttons: Vec<Vec<Vec<String>>>,
    menus: Vec<String>,
    options: Map<String, Value>,
    language: Option<String>,
    features: Option<Vec<String>>,
}

impl RichTextAreaBuilder {
    /// Create a builder with the default toolbar, no menu bar, no extra
    /// options and the registry's default features.
    pub fn new(registry: Arc<FeatureRegistry>) -> Self {
        let row: Vec<Vec<String>> = DEFAULT_BUTTONS
            .iter()
            .map(|group| group.iter().map(|b| b.to_string()).collect())
            .collect();
        Self {
            registry,
            buttons: vec![row],
            menus: Vec::new(),
            options: Map::new(),
            language: None,
            features: None,
        }
    }

    /// Replace the toolbar: rows of button groups. No rows disables it.
    pub fn buttons(mut self, rows: Vec<Vec<Vec<&str>>>) -> Self {
        self.buttons = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|group| group.into_iter().map(str::to_string).collect())
                    .collect()
            })
            .collect();
        self
    }

    /// Menus shown in the menu bar. An empty list disables it.
    pub fn menus(mut self, menus: Vec<&str>) -> Self {
        self.menus = menus.into_iter().map(str::to_string).collect();
        self
    }

    /// Set an editor option, overriding the built-in default of that name.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Set several editor options at once.
    pub fn options(mut self, options: Map<String, Value>) -> Self {
        self.options.extend(options);
        self
    }

    /// Active language code, e.g. `en-us` or `pt-br`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Features used for conversion instead of the registry defaults.
    pub fn features(mut self, features: Vec<&str>) -> Self {
        self.features = Some(features.into_iter().map(str::to_string).collect());
        self
    }

    /// Validate the configuration and create the widget.
    ///
    /// Returns [`RichTextError::Config`] if a button or menu name is empty or
    /// contains whitespace or `|`, since those are the separators of the
    /// strings sent to the editor.
    pub fn build(self) -> Result<RichTextArea> {
        for name in self.buttons.iter().flatten().flatten() {
            check_name("button", name)?;
        }
        for name in &self.menus {
            check_name("menu", name)?;
        }

        let mut options = Map::new();
        options.insert("browser_spellcheck".into(), Value::Bool(true));
        options.insert("noneditable_leave_contenteditable".into(), Value::Bool(true));
        options.insert(
            "language".into(),
            Value::String(to_locale(self.language.as_deref().unwrap_or("en"))),
        );
        options.insert("language_load".into(), Value::Bool(true));
        options.extend(self.options);

        let converter = EditorHtmlConverter::new(self.registry, self.features);

        Ok(RichTextArea::new(
            converter,
            self.buttons,
            self.menus,
            options,
            self.language,
        ))
    }
}

fn check_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '|') {
        return Err(RichTextError::Config(format!("invalid {kind} name {name:?}")));
    }
    Ok(())
}
