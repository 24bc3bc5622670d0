//! Inline code and highlighted code blocks

use super::styled;
use crate::highlight::Highlighter;
use crate::node::{Attributes, Node};

pub const INLINE_CODE_CLASS: &str = "rounded bg-gray-100 px-1 py-0.5 font-mono text-sm text-gray-800";
pub const CODE_BLOCK_CLASS: &str =
    "mb-4 overflow-x-auto rounded-lg bg-gray-50 p-4 font-mono text-sm leading-6";

/// Attribute carrying the fenced block language.
pub const LANGUAGE_ATTR: &str = "data-language";

pub fn inline_code(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("code", INLINE_CODE_CLASS, attrs, children)
}

/// Renders a fenced code block.
///
/// The children's text is the raw source. It is replaced by highlighter
/// output wrapped in `code class="language-X"`; the language comes from the
/// `data-language` attribute, which stays on the `pre` element.
pub fn code_block(attrs: Attributes, children: Vec<Node>) -> Node {
    let source: String = children.iter().map(Node::text_content).collect();
    let language = attrs
        .get(LANGUAGE_ATTR)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    let highlighted = Highlighter::shared().highlight_or_escape(&source, language.as_deref());

    let code_attrs = match &language {
        Some(lang) => Attributes::new().with("class", format!("language-{}", lang)),
        None => Attributes::new(),
    };
    let code = Node::element("code", code_attrs, vec![Node::Highlighted(highlighted)]);

    styled("pre", CODE_BLOCK_CLASS, attrs, vec![code])
}
