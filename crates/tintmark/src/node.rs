//! Document tree model.
//!
//! The transformer operates on a tree of text and element nodes produced
//! by an upstream markup parser. Text nodes are the only nodes it
//! inspects; elements are carried through with their children walked.

use crate::color::ColorSpec;

/// A node in a document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Raw character data.
    Text(String),
    /// An element with an optional inline color style and children.
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Get the text value if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(value) => Some(value),
            Node::Element(_) => None,
        }
    }

    /// Get the element if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }
}

/// An element node: tag name, optional inline color, ordered children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `p` or `span`.
    pub tag: String,
    /// Inline `color` style property, if any.
    pub color: Option<ColorSpec>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an unstyled element with the given children.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            color: None,
            children,
        }
    }

    /// Create the styled-span output shape: a `span` carrying one inline
    /// color and a single literal text child.
    pub fn styled_span(color: ColorSpec, body: impl Into<String>) -> Self {
        Self {
            tag: "span".to_string(),
            color: Some(color),
            children: vec![Node::text(body)],
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An ordered sequence of content nodes.
///
/// # Examples
///
/// ```
/// use tintmark::{Document, Node};
///
/// let doc = Document::new(vec![Node::text("Hello")]);
/// assert_eq!(doc.nodes().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document from a sequence of nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Get the nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the document, returning its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Returns true if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rewrite every `[color=SPEC]BODY[/color]` occurrence in the
    /// document's text nodes into a styled span.
    ///
    /// See [`transform`](crate::transform::transform).
    pub fn transform(self) -> Self {
        crate::transform::transform(self)
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
