//! Serialization of an element tree to markup text.

use crate::element::{Content, Element};
use crate::escape::escape_html;

/// Tags serialized without a closing tag or children.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serialize the tree rooted at `root` to compact HTML.
///
/// Attribute order is deterministic: `id`, `class`, then the remaining
/// attributes in sorted order. Text content is escaped; tags and attribute
/// names are trusted (they come from code, not data).
pub fn render_to_string(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    if el.is_text() {
        if let Content::Text(text) = &el.content {
            out.push_str(&escape_html(text));
        }
        return;
    }

    out.push('<');
    out.push_str(&el.tag);
    if let Some(id) = &el.id {
        out.push_str(&format!(" id=\"{}\"", escape_html(id)));
    }
    if !el.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_html(&el.classes.join(" "))));
    }
    for (key, value) in &el.attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_html(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str(&format!("</{}>", el.tag));
}

impl Element {
    /// Serialize this element and its subtree to markup.
    pub fn to_html(&self) -> String {
        render_to_string(self)
    }
}
