//! Styled rendering functions for markup elements
//!
//! Each element kind maps to one function taking the element's attributes and
//! rendered children. The functions attach a fixed utility class first and
//! apply caller attributes afterwards, so caller values win on collision.
//! Anchors, images, code blocks and the table shorthand additionally reshape
//! the node they produce.

pub mod code;
pub mod disclosure;
pub mod image;
pub mod layout;
pub mod link;
pub mod lists;
pub mod nav;
pub mod table;
pub mod typography;

use crate::node::{Attributes, Node};

/// Builds a host element with a fixed class and the caller's attributes.
pub(crate) fn styled(
    tag: &'static str,
    class: &str,
    attrs: Attributes,
    children: Vec<Node>,
) -> Node {
    let attrs = Attributes::new().with("class", class).merge(attrs);
    Node::element(tag, attrs, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_applies_fixed_class() {
        // Act
        let node = styled("p", "mb-4", Attributes::new(), vec![Node::text("x")]);

        // Assert
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.attr("class"), Some("mb-4"));
    }

    #[test]
    fn test_styled_caller_class_wins() {
        // Act
        let node = styled(
            "p",
            "mb-4",
            Attributes::from([("class", "custom"), ("id", "intro")]),
            vec![],
        );

        // Assert
        assert_eq!(node.attr("class"), Some("custom"));
        assert_eq!(node.attr("id"), Some("intro"));
    }

    #[test]
    fn test_styled_fixed_class_renders_first() {
        // Act
        let html = styled("em", "italic", Attributes::from([("lang", "fr")]), vec![]).to_html();

        // Assert
        assert_eq!(html, "<em class=\"italic\" lang=\"fr\"></em>");
    }
}
