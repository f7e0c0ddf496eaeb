//! Element-tree output adapter.
//!
//! Walks a document tree and replaces every `[color=SPEC]BODY[/color]`
//! occurrence in its text nodes with a styled `span` element, splicing
//! the resulting fragments in place among the node's siblings.

use log::trace;

use crate::node::{Document, Element, Node};
use crate::scanner::{Fragment, Scanner, contains_tag};

/// Transform a document, rewriting color tags into styled spans.
///
/// Text nodes with no complete tag are carried through unchanged. A text
/// node with N matches is replaced, at its position among its siblings,
/// by the interleaved text/span fragment sequence; empty leading and
/// trailing text fragments are omitted. Element nodes keep their tag and
/// style, with their children walked recursively.
///
/// Re-running the transform on its own output is a no-op: a match body
/// can never contain a complete tag, so spliced text never re-matches.
///
/// # Examples
///
/// ```
/// use tintmark::{transform, Document, Node};
///
/// let doc = Document::new(vec![Node::text("A [color=red]B[/color] C")]);
/// let out = transform(doc);
/// assert_eq!(out.nodes().len(), 3);
/// assert_eq!(out.nodes()[0], Node::text("A "));
/// assert_eq!(out.nodes()[2], Node::text(" C"));
/// ```
pub fn transform(document: Document) -> Document {
    Document::new(transform_nodes(document.into_nodes()))
}

fn transform_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Text(text) => splice_text(text, &mut out),
            Node::Element(element) => {
                out.push(Node::Element(Element {
                    tag: element.tag,
                    color: element.color,
                    children: transform_nodes(element.children),
                }));
            }
        }
    }
    out
}

/// Append the fragment expansion of one text node to `out`.
fn splice_text(text: String, out: &mut Vec<Node>) {
    // Identity preservation: no match means the same node, untouched
    if !contains_tag(&text) {
        out.push(Node::Text(text));
        return;
    }

    let before = out.len();
    for fragment in Scanner::new(&text) {
        match fragment {
            Fragment::Text(run) => out.push(Node::text(run)),
            Fragment::Span { color, body } => {
                out.push(Element::styled_span(color, body).into());
            }
        }
    }
    trace!("split text node into {} fragments", out.len() - before);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSpec;

    fn span(color: &str, body: &str) -> Node {
        Element::styled_span(ColorSpec::parse(color).unwrap(), body).into()
    }

    #[test]
    fn transform_plain_text_is_identity() {
        let doc = Document::new(vec![Node::text("Hello World")]);
        assert_eq!(doc.clone().transform(), doc);
    }

    #[test]
    fn transform_single_tag_no_surrounding_fragments() {
        let doc = Document::new(vec![Node::text("[color=#B0041A]Bộ sưu tập[/color]")]);
        assert_eq!(
            doc.transform().into_nodes(),
            vec![span("#B0041A", "Bộ sưu tập")]
        );
    }

    #[test]
    fn transform_interleaves_fragments() {
        let doc = Document::new(vec![Node::text("A [color=red]B[/color] C")]);
        assert_eq!(
            doc.transform().into_nodes(),
            vec![Node::text("A "), span("red", "B"), Node::text(" C")]
        );
    }

    #[test]
    fn transform_back_to_back_tags() {
        let doc = Document::new(vec![Node::text(
            "[color=red]A[/color][color=blue]B[/color]",
        )]);
        assert_eq!(
            doc.transform().into_nodes(),
            vec![span("red", "A"), span("blue", "B")]
        );
    }

    #[test]
    fn transform_unterminated_tag_is_identity() {
        let doc = Document::new(vec![Node::text("[color=red]A")]);
        assert_eq!(doc.clone().transform(), doc);
    }

    #[test]
    fn transform_invalid_spec_is_identity() {
        let doc = Document::new(vec![Node::text("[color=12]A[/color]")]);
        assert_eq!(doc.clone().transform(), doc);
    }

    #[test]
    fn transform_recurses_into_elements() {
        let doc = Document::new(vec![
            Element::new("p", vec![Node::text("A [color=red]B[/color]")]).into(),
        ]);
        let out = doc.transform().into_nodes();
        let element = out[0].as_element().unwrap();
        assert_eq!(element.tag, "p");
        assert_eq!(element.children, vec![Node::text("A "), span("red", "B")]);
    }

    #[test]
    fn transform_leaves_non_text_siblings_in_order() {
        let doc = Document::new(vec![
            Element::new("img", vec![]).into(),
            Node::text("[color=red]B[/color]"),
            Element::new("br", vec![]).into(),
        ]);
        let out = doc.transform().into_nodes();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_element().unwrap().tag, "img");
        assert_eq!(out[1], span("red", "B"));
        assert_eq!(out[2].as_element().unwrap().tag, "br");
    }

    #[test]
    fn transform_is_idempotent() {
        let doc = Document::new(vec![Node::text("A [color=red]B[/color] C")]);
        let once = doc.transform();
        let twice = once.clone().transform();
        assert_eq!(once, twice);
    }

    #[test]
    fn transform_empty_document() {
        assert!(Document::default().transform().is_empty());
    }
}
