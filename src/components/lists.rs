//! Ordered and unordered lists

use super::styled;
use crate::node::{Attributes, Node};

pub const UNORDERED_CLASS: &str = "mb-4 ml-6 list-disc";
pub const ORDERED_CLASS: &str = "mb-4 ml-6 list-decimal";
pub const ITEM_CLASS: &str = "mb-1 leading-7";

pub fn unordered_list(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("ul", UNORDERED_CLASS, attrs, children)
}

/// Ordered list; a `start` attribute from the caller is preserved.
pub fn ordered_list(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("ol", ORDERED_CLASS, attrs, children)
}

pub fn list_item(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("li", ITEM_CLASS, attrs, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_list_keeps_start() {
        // Act
        let node = ordered_list(Attributes::from([("start", "3")]), vec![]);

        // Assert
        assert_eq!(node.tag(), Some("ol"));
        assert_eq!(node.attr("start"), Some("3"));
        assert_eq!(node.attr("class"), Some(ORDERED_CLASS));
    }

    #[test]
    fn test_list_nesting_renders_in_order() {
        // Arrange
        let items = vec![
            list_item(Attributes::new(), vec![Node::text("one")]),
            list_item(Attributes::new(), vec![Node::text("two")]),
        ];

        // Act
        let html = unordered_list(Attributes::new(), items).to_html();

        // Assert
        let one = html.find("one").expect("first item");
        let two = html.find("two").expect("second item");
        assert!(one < two);
        assert!(html.starts_with("<ul class=\"mb-4 ml-6 list-disc\">"));
    }
}
