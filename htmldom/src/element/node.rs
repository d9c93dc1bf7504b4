use std::collections::BTreeMap;

use super::Content;

/// A node in the in-memory HTML tree.
///
/// Elements are plain data: a tag, an optional id, classes, attributes, and
/// either text or child elements. Builder methods consume and return `self`
/// so trees read top-down at the call site. Text nodes are elements with an
/// empty tag and `Content::Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`. Sorted map so serialized
    /// markup is deterministic.
    pub attrs: BTreeMap<String, String>,
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
        }
    }

    /// Create a text node. Serialized as escaped text, no tag.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::Text(content.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    // Common tags

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th() -> Self {
        Self::new("th")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn anchor() -> Self {
        Self::new("a")
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class.to_string());
        } else {
            self.remove_class(class);
        }
    }

    // Attributes

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Read a `data-*` attribute.
    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{key}"))
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    // Children

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(_) => {
                // Text content becomes a leading text node.
                let Content::Text(text) = std::mem::take(&mut self.content) else {
                    unreachable!()
                };
                self.content = Content::Children(vec![Element::text(text), child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    /// Borrow the child list, empty for leaf nodes.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutably borrow the child list, creating it if the node was empty.
    pub fn child_nodes_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            let prior = std::mem::take(&mut self.content);
            let children = match prior {
                Content::Text(text) => vec![Element::text(text)],
                _ => Vec::new(),
            };
            self.content = Content::Children(children);
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!(),
        }
    }

    /// Replace all content with the given children.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    /// Replace all content with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }
}
