//! Small helpers for writing HTML tags back out as text.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// HTML5 void elements that must not have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Write `<tag a="b" ...>`, escaping attribute values.
pub(crate) fn push_start_tag<'a>(
    out: &mut String,
    tag: &str,
    attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    out.push('<');
    out.push_str(tag);
    push_attrs(out, attrs);
    out.push('>');
}

/// Write `<tag a="b" .../>`.
pub(crate) fn push_self_closing_tag<'a>(
    out: &mut String,
    tag: &str,
    attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    out.push('<');
    out.push_str(tag);
    push_attrs(out, attrs);
    out.push_str("/>");
}

pub(crate) fn push_end_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

pub(crate) fn push_text(out: &mut String, text: &str) {
    out.push_str(&encode_text(text));
}

fn push_attrs<'a>(out: &mut String, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) {
    for (k, v) in attrs {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(v));
        out.push('"');
    }
}
