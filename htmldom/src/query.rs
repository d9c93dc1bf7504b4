//! Tree traversal: lookups by id, class scans, and text collection.

use crate::element::{Content, Element};

impl Element {
    /// Find the first element with the given id, depth first.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`Element::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        if let Content::Children(children) = &mut self.content {
            for child in children {
                if let Some(found) = child.find_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Visit every element in the subtree, depth first, self included.
    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        visit(self);
        for child in self.child_nodes() {
            child.walk(visit);
        }
    }

    /// Mutable variant of [`Element::walk`].
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        visit(self);
        if let Content::Children(children) = &mut self.content {
            for child in children {
                child.walk_mut(visit);
            }
        }
    }

    /// Find the first descendant (or self) matching a predicate.
    pub fn find_by(&self, matches: &impl Fn(&Element) -> bool) -> Option<&Element> {
        if matches(self) {
            return Some(self);
        }
        self.child_nodes()
            .iter()
            .find_map(|child| child.find_by(matches))
    }

    /// Collect references to every descendant (or self) matching a predicate.
    pub fn select(&self, matches: &impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_into(matches, &mut out);
        out
    }

    fn collect_into<'a>(
        &'a self,
        matches: &impl Fn(&Element) -> bool,
        out: &mut Vec<&'a Element>,
    ) {
        if matches(self) {
            out.push(self);
        }
        for child in self.child_nodes() {
            child.collect_into(matches, out);
        }
    }

    /// Concatenated text of the subtree, in document order, with no
    /// separators added (like DOM `textContent`).
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |el| {
            if let Content::Text(text) = &el.content {
                out.push_str(text);
            }
        });
        out
    }
}
