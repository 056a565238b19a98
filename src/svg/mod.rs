//! # SVG Element Tree
//!
//! An owned, namespace-free representation of the composed document.
//!
//! The composed coin is a tree of drawing primitives rooted at a canvas
//! element. Ownership is strictly tree-contained: embedding a fragment's
//! children into a group moves them out of the fragment's own root
//! (see [`Element::take_children`]), so no sub-element is ever shared.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Stateless document-assembly primitives |
//! | [`writer`] | Serialization and namespace canonicalization |

pub mod builder;
pub mod writer;

/// A node in the composed document: an element or raw character data.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An owned XML element with ordered attributes and children.
///
/// Attribute and child order are preserved exactly as inserted so that
/// serialization is deterministic: composing the same inputs twice yields
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value in place (the
    /// attribute keeps its original position).
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Builder-style [`set_attr`](Self::set_attr).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// All attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Append a sequence of nodes, preserving their order.
    pub fn append(&mut self, nodes: Vec<Node>) {
        self.children.extend(nodes);
    }

    /// Children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Move all children out, leaving this element empty.
    ///
    /// Ownership of the subtree transfers to the caller; the emptied
    /// source element is discarded, not reused.
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut element = Element::new("svg")
            .with_attr("width", "100")
            .with_attr("height", "50");
        element.set_attr("width", "200");
        assert_eq!(element.attr("width"), Some("200"));
        // Position preserved: width still first
        assert_eq!(element.attrs()[0].0, "width");
        assert_eq!(element.attrs().len(), 2);
    }

    #[test]
    fn test_take_children_transfers_ownership() {
        let mut root = Element::new("svg");
        root.push(Element::new("path"));
        root.push(Element::new("circle"));

        let children = root.take_children();
        assert_eq!(children.len(), 2);
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_child_elements_skips_text() {
        let mut element = Element::new("text");
        element.push_text("LEGEND");
        element.push(Element::new("tspan"));
        assert_eq!(element.child_elements().count(), 1);
        assert_eq!(element.children().len(), 2);
    }
}
