//! The form widget tying the converter to a field's read and render paths.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::attributes::Attributes;
use crate::converter::EditorHtmlConverter;
use crate::error::Result;
use crate::locale::editor_language;
use crate::markup;

/// A `<textarea>` that the admin turns into a TinyMCE editor.
///
/// Stored HTML is expanded for the editor on [`render`](Self::render) and
/// submitted HTML is cleaned for storage in
/// [`value_from_datadict`](Self::value_from_datadict).
///
/// Created with [`RichTextAreaBuilder`](crate::RichTextAreaBuilder).
pub struct RichTextArea {
    converter: EditorHtmlConverter,
    buttons: Vec<Vec<Vec<String>>>,
    menus: Vec<String>,
    options: Map<String, Value>,
    language: Option<String>,
}

impl RichTextArea {
    pub(crate) fn new(
        converter: EditorHtmlConverter,
        buttons: Vec<Vec<Vec<String>>>,
        menus: Vec<String>,
        options: Map<String, Value>,
        language: Option<String>,
    ) -> Self {
        Self {
            converter,
            buttons,
            menus,
            options,
            language,
        }
    }

    pub fn converter(&self) -> &EditorHtmlConverter {
        &self.converter
    }

    pub fn features(&self) -> &[String] {
        self.converter.features()
    }

    /// Editor options, before toolbar, menu bar and language are applied.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Read field `name` from submitted form data, converted to database
    /// format. A missing field stays `None`.
    pub fn value_from_datadict(&self, data: &HashMap<String, String>, name: &str) -> Option<String> {
        data.get(name)
            .map(|value| self.converter.to_database_format(value))
    }

    /// Render the textarea with the stored `value` converted for the editor,
    /// followed by the editor's init script.
    ///
    /// `attrs` are extra textarea attributes; `id` is passed to the editor.
    pub fn render(&self, name: &str, value: Option<&str>, attrs: &[(&str, &str)]) -> Result<String> {
        let translated = value.map(|v| self.converter.from_database_format(v));

        let mut final_attrs = Attributes::new();
        final_attrs.insert("name", name);
        final_attrs.insert("cols", "40");
        final_attrs.insert("rows", "10");
        final_attrs.extend(attrs.iter().copied());

        let mut out = String::new();
        markup::push_start_tag(&mut out, "textarea", final_attrs.iter());
        out.push('\n');
        if let Some(translated) = &translated {
            markup::push_text(&mut out, translated);
        }
        markup::push_end_tag(&mut out, "textarea");

        let js = self.render_js_init(final_attrs.get("id"))?;
        out.push_str("<script>");
        out.push_str(&js);
        out.push_str("</script>");
        Ok(out)
    }

    /// The client-side call turning element `id` into an editor.
    pub fn render_js_init(&self, id: Option<&str>) -> Result<String> {
        let config = self.client_config();
        Ok(format!(
            "makeTinyMCEEditable({}, {});",
            serde_json::to_string(&id)?,
            serde_json::to_string(&config)?
        ))
    }

    /// The configuration object handed to the editor runtime.
    pub fn client_config(&self) -> Map<String, Value> {
        let mut config = self.options.clone();

        let toolbar = if self.buttons.is_empty() {
            Value::Bool(false)
        } else {
            self.buttons
                .iter()
                .map(|row| {
                    let groups: Vec<String> = row.iter().map(|group| group.join(" ")).collect();
                    Value::String(groups.join(" | "))
                })
                .collect()
        };
        config.insert("toolbar".into(), toolbar);

        let menubar = if self.menus.is_empty() {
            Value::Bool(false)
        } else {
            Value::String(self.menus.join(" "))
        };
        config.insert("menubar".into(), menubar);

        config.insert(
            "language".into(),
            Value::String(editor_language(self.language.as_deref())),
        );
        config.insert("features".into(), self.features().into());
        config
    }
}
