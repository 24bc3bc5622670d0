//! Headings, paragraphs and inline text styling

use super::styled;
use crate::node::{Attributes, Node};

pub const H1_CLASS: &str = "mt-8 mb-4 text-4xl font-bold tracking-tight text-gray-900";
pub const H2_CLASS: &str = "mt-8 mb-4 text-3xl font-semibold text-gray-900";
pub const H3_CLASS: &str = "mt-6 mb-3 text-2xl font-semibold text-gray-900";
pub const H4_CLASS: &str = "mt-6 mb-2 text-xl font-semibold text-gray-900";
pub const H5_CLASS: &str = "mt-4 mb-2 text-lg font-semibold text-gray-900";
pub const H6_CLASS: &str = "mt-4 mb-2 text-base font-semibold text-gray-700";
pub const PARAGRAPH_CLASS: &str = "mb-4 leading-7 text-gray-800";
pub const EMPHASIS_CLASS: &str = "italic";
pub const STRONG_CLASS: &str = "font-semibold text-gray-900";
pub const BLOCKQUOTE_CLASS: &str = "my-4 border-l-4 border-gray-300 pl-4 italic text-gray-600";
pub const RULE_CLASS: &str = "my-8 border-t border-gray-200";
pub const STRIKETHROUGH_CLASS: &str = "line-through text-gray-500";
pub const SUPERSCRIPT_CLASS: &str = "align-super text-xs";
pub const SUBSCRIPT_CLASS: &str = "align-sub text-xs";

pub fn h1(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h1", H1_CLASS, attrs, children)
}

pub fn h2(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h2", H2_CLASS, attrs, children)
}

pub fn h3(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h3", H3_CLASS, attrs, children)
}

pub fn h4(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h4", H4_CLASS, attrs, children)
}

pub fn h5(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h5", H5_CLASS, attrs, children)
}

pub fn h6(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("h6", H6_CLASS, attrs, children)
}

pub fn paragraph(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("p", PARAGRAPH_CLASS, attrs, children)
}

pub fn emphasis(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("em", EMPHASIS_CLASS, attrs, children)
}

pub fn strong(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("strong", STRONG_CLASS, attrs, children)
}

pub fn blockquote(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("blockquote", BLOCKQUOTE_CLASS, attrs, children)
}

/// Thematic break. Children are ignored since `hr` is a void element.
pub fn rule(attrs: Attributes, _children: Vec<Node>) -> Node {
    styled("hr", RULE_CLASS, attrs, Vec::new())
}

pub fn strikethrough(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("del", STRIKETHROUGH_CLASS, attrs, children)
}

pub fn superscript(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("sup", SUPERSCRIPT_CLASS, attrs, children)
}

pub fn subscript(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("sub", SUBSCRIPT_CLASS, attrs, children)
}
