//! Process-wide mapping from element kinds to rendering functions.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::components::{code, disclosure, image, link, lists, table, typography};
use crate::element::ElementKind;
use crate::node::{Attributes, Node};

/// Rendering function for one element kind.
///
/// Takes the element's attributes and already rendered children. Pure and
/// total: every input produces a node.
pub type RenderFn = fn(Attributes, Vec<Node>) -> Node;

static COMPONENTS: OnceLock<ComponentMap> = OnceLock::new();

/// Immutable element kind to rendering function table.
pub struct ComponentMap {
    entries: HashMap<ElementKind, RenderFn>,
}

impl ComponentMap {
    /// Builds the styled component table.
    ///
    /// Every kind the document compiler produces is mapped except
    /// [`ElementKind::LineBreak`], which renders as a bare `br`.
    fn styled() -> Self {
        let entries: [(ElementKind, RenderFn); 29] = [
            (ElementKind::Heading1, typography::h1),
            (ElementKind::Heading2, typography::h2),
            (ElementKind::Heading3, typography::h3),
            (ElementKind::Heading4, typography::h4),
            (ElementKind::Heading5, typography::h5),
            (ElementKind::Heading6, typography::h6),
            (ElementKind::Paragraph, typography::paragraph),
            (ElementKind::UnorderedList, lists::unordered_list),
            (ElementKind::OrderedList, lists::ordered_list),
            (ElementKind::ListItem, lists::list_item),
            (ElementKind::Emphasis, typography::emphasis),
            (ElementKind::Strong, typography::strong),
            (ElementKind::Anchor, link::anchor),
            (ElementKind::InlineCode, code::inline_code),
            (ElementKind::CodeBlock, code::code_block),
            (ElementKind::Image, image::image),
            (ElementKind::Blockquote, typography::blockquote),
            (ElementKind::Rule, typography::rule),
            (ElementKind::Strikethrough, typography::strikethrough),
            (ElementKind::Superscript, typography::superscript),
            (ElementKind::Subscript, typography::subscript),
            (ElementKind::Details, disclosure::details),
            (ElementKind::Summary, disclosure::summary),
            (ElementKind::Table, table::table),
            (ElementKind::TableHead, table::table_head),
            (ElementKind::TableBody, table::table_body),
            (ElementKind::TableRow, table::table_row),
            (ElementKind::TableHeaderCell, table::header_cell),
            (ElementKind::TableCell, table::cell),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the rendering function for a kind, if one is mapped.
    pub fn get(&self, kind: ElementKind) -> Option<RenderFn> {
        self.entries.get(&kind).copied()
    }

    pub fn contains(&self, kind: ElementKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Renders an element through its mapped function.
    ///
    /// Unmapped kinds fall back to the host element with the given
    /// attributes and no styling.
    pub fn render(&self, kind: ElementKind, attrs: Attributes, children: Vec<Node>) -> Node {
        match self.get(kind) {
            Some(render) => render(attrs, children),
            None => {
                let children = if kind.is_void() { Vec::new() } else { children };
                Node::element(kind.tag(), attrs, children)
            }
        }
    }
}

/// Returns the process-wide component map.
///
/// Built on first call and shared for the life of the process.
pub fn components() -> &'static ComponentMap {
    COMPONENTS.get_or_init(ComponentMap::styled)
}
