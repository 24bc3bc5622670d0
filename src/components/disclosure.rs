//! Collapsible details and summary

use super::styled;
use crate::node::{Attributes, Node};

pub const DETAILS_CLASS: &str = "my-4 rounded-lg border border-gray-200 px-4 py-2";
pub const SUMMARY_CLASS: &str = "cursor-pointer font-semibold text-gray-900";

pub fn details(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("details", DETAILS_CLASS, attrs, children)
}

pub fn summary(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("summary", SUMMARY_CLASS, attrs, children)
}
