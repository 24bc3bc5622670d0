//! Anchor rendering with navigation policy

use crate::classify::AnchorTarget;
use crate::node::{Attributes, NavLink, Node};

pub const LINK_CLASS: &str = "text-blue-600 underline hover:text-blue-800";

/// Renders an anchor according to where it points.
///
/// - `/path`: internal navigation link handled client side
/// - `#fragment`: plain in-page anchor
/// - anything else: external link opened in a new browsing context with
///   `rel="noopener noreferrer"` so the target cannot reach the opener or
///   receive a referrer
///
/// A missing `href` is treated as an empty external destination.
pub fn anchor(attrs: Attributes, children: Vec<Node>) -> Node {
    let href = attrs.get("href").unwrap_or_default().to_string();

    match AnchorTarget::classify(&href) {
        AnchorTarget::InternalPath => {
            let attrs = Attributes::new()
                .with("href", href)
                .with("class", LINK_CLASS)
                .merge(attrs);
            Node::NavLink(NavLink { attrs, children })
        }
        AnchorTarget::Fragment => {
            let attrs = Attributes::new()
                .with("href", href)
                .with("class", LINK_CLASS)
                .merge(attrs);
            Node::element("a", attrs, children)
        }
        AnchorTarget::External => {
            let attrs = Attributes::new()
                .with("href", href)
                .with("class", LINK_CLASS)
                .with("target", "_blank")
                .with("rel", "noopener noreferrer")
                .merge(attrs);
            Node::element("a", attrs, children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_path_uses_navigation_link() {
        // Act
        let node = anchor(
            Attributes::from([("href", "/about")]),
            vec![Node::text("About")],
        );

        // Assert
        let Node::NavLink(link) = &node else {
            panic!("Expected navigation link, got {:?}", node);
        };
        assert_eq!(link.href(), "/about");
        assert_eq!(node.attr("class"), Some(LINK_CLASS));
        assert_eq!(node.attr("target"), None);
    }

    #[test]
    fn test_fragment_is_plain_anchor() {
        // Act
        let node = anchor(Attributes::from([("href", "#section")]), vec![]);

        // Assert
        assert!(matches!(node, Node::Element(_)));
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attr("href"), Some("#section"));
        assert_eq!(node.attr("target"), None);
        assert_eq!(node.attr("rel"), None);
    }

    #[test]
    fn test_external_opens_new_context() {
        // Act
        let node = anchor(Attributes::from([("href", "https://example.com")]), vec![]);

        // Assert
        assert!(matches!(node, Node::Element(_)));
        assert_eq!(node.attr("target"), Some("_blank"));
        assert_eq!(node.attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn test_missing_href_is_external() {
        // Act
        let node = anchor(Attributes::new(), vec![Node::text("x")]);

        // Assert
        assert_eq!(node.attr("href"), Some(""));
        assert_eq!(node.attr("target"), Some("_blank"));
    }

    #[test]
    fn test_caller_attributes_preserved() {
        // Act
        let node = anchor(
            Attributes::from([("href", "/docs"), ("title", "Docs"), ("class", "nav")]),
            vec![],
        );

        // Assert
        assert_eq!(node.attr("title"), Some("Docs"));
        assert_eq!(node.attr("class"), Some("nav"));
    }

    #[test]
    fn test_external_renders_security_attributes() {
        // Act
        let html = anchor(
            Attributes::from([("href", "https://example.com")]),
            vec![Node::text("Example")],
        )
        .to_html();

        // Assert
        assert_eq!(
            html,
            "<a href=\"https://example.com\" class=\"text-blue-600 underline hover:text-blue-800\" \
             target=\"_blank\" rel=\"noopener noreferrer\">Example</a>"
        );
    }
}
