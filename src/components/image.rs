//! Dimensioned image rendering

use crate::classify::ImageSource;
use crate::node::{Attributes, Node, OptimizedImage};

pub const IMAGE_CLASS: &str = "my-4 rounded-lg";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Renders an image through the optimized image component.
///
/// Remote and local sources are treated the same: fixed 800x400 dimensions,
/// empty alt text when none is given, and the image class. Caller attributes
/// are applied last. Children are ignored since `img` is a void element.
pub fn image(attrs: Attributes, _children: Vec<Node>) -> Node {
    let src = attrs.get("src").unwrap_or_default().to_string();
    log::trace!("image {} ({:?})", src, ImageSource::classify(&src));

    let attrs = Attributes::new()
        .with("src", src)
        .with("alt", "")
        .with("width", DEFAULT_WIDTH.to_string())
        .with("height", DEFAULT_HEIGHT.to_string())
        .with("class", IMAGE_CLASS)
        .merge(attrs);

    Node::Image(OptimizedImage { attrs })
}
