//! Closed set of markup element kinds.

/// Markup construct produced by the document compiler.
///
/// Each kind corresponds to exactly one host HTML element. The set is closed:
/// the compiler never produces a kind outside this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Emphasis,
    Strong,
    Anchor,
    InlineCode,
    CodeBlock,
    Image,
    Blockquote,
    Rule,
    Strikethrough,
    Superscript,
    Subscript,
    Details,
    Summary,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeaderCell,
    TableCell,
    LineBreak,
}

impl ElementKind {
    /// Every element kind, in declaration order.
    pub const ALL: [ElementKind; 30] = [
        ElementKind::Heading1,
        ElementKind::Heading2,
        ElementKind::Heading3,
        ElementKind::Heading4,
        ElementKind::Heading5,
        ElementKind::Heading6,
        ElementKind::Paragraph,
        ElementKind::UnorderedList,
        ElementKind::OrderedList,
        ElementKind::ListItem,
        ElementKind::Emphasis,
        ElementKind::Strong,
        ElementKind::Anchor,
        ElementKind::InlineCode,
        ElementKind::CodeBlock,
        ElementKind::Image,
        ElementKind::Blockquote,
        ElementKind::Rule,
        ElementKind::Strikethrough,
        ElementKind::Superscript,
        ElementKind::Subscript,
        ElementKind::Details,
        ElementKind::Summary,
        ElementKind::Table,
        ElementKind::TableHead,
        ElementKind::TableBody,
        ElementKind::TableRow,
        ElementKind::TableHeaderCell,
        ElementKind::TableCell,
        ElementKind::LineBreak,
    ];

    /// Host element tag name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Heading1 => "h1",
            ElementKind::Heading2 => "h2",
            ElementKind::Heading3 => "h3",
            ElementKind::Heading4 => "h4",
            ElementKind::Heading5 => "h5",
            ElementKind::Heading6 => "h6",
            ElementKind::Paragraph => "p",
            ElementKind::UnorderedList => "ul",
            ElementKind::OrderedList => "ol",
            ElementKind::ListItem => "li",
            ElementKind::Emphasis => "em",
            ElementKind::Strong => "strong",
            ElementKind::Anchor => "a",
            ElementKind::InlineCode => "code",
            ElementKind::CodeBlock => "pre",
            ElementKind::Image => "img",
            ElementKind::Blockquote => "blockquote",
            ElementKind::Rule => "hr",
            ElementKind::Strikethrough => "del",
            ElementKind::Superscript => "sup",
            ElementKind::Subscript => "sub",
            ElementKind::Details => "details",
            ElementKind::Summary => "summary",
            ElementKind::Table => "table",
            ElementKind::TableHead => "thead",
            ElementKind::TableBody => "tbody",
            ElementKind::TableRow => "tr",
            ElementKind::TableHeaderCell => "th",
            ElementKind::TableCell => "td",
            ElementKind::LineBreak => "br",
        }
    }

    /// Looks up the kind for a host tag name (case insensitive).
    ///
    /// Returns None for tags outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Heading kind for a level between 1 and 6.
    ///
    /// Levels outside the range are clamped, matching how browsers treat
    /// out-of-range heading levels.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => ElementKind::Heading1,
            2 => ElementKind::Heading2,
            3 => ElementKind::Heading3,
            4 => ElementKind::Heading4,
            5 => ElementKind::Heading5,
            _ => ElementKind::Heading6,
        }
    }

    /// Whether the host element has no closing tag.
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            ElementKind::Image | ElementKind::Rule | ElementKind::LineBreak
        )
    }

    /// Whether the kind may be written as a raw HTML tag inside a document.
    ///
    /// Markdown has no syntax for these constructs, so documents spell them
    /// as tags and the compiler routes them through the component map.
    pub fn is_component_tag(&self) -> bool {
        matches!(
            self,
            ElementKind::Details
                | ElementKind::Summary
                | ElementKind::Superscript
                | ElementKind::Subscript
                | ElementKind::LineBreak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_unique() {
        // Arrange
        let mut tags: Vec<&str> = ElementKind::ALL.iter().map(|k| k.tag()).collect();

        // Act
        tags.sort_unstable();
        tags.dedup();

        // Assert
        assert_eq!(tags.len(), ElementKind::ALL.len());
    }

    #[test]
    fn test_from_tag_round_trips_every_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(ElementKind::from_tag("DETAILS"), Some(ElementKind::Details));
        assert_eq!(ElementKind::from_tag("Sub"), Some(ElementKind::Subscript));
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(ElementKind::from_tag("script"), None);
        assert_eq!(ElementKind::from_tag(""), None);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(ElementKind::heading(1), ElementKind::Heading1);
        assert_eq!(ElementKind::heading(4), ElementKind::Heading4);
        assert_eq!(ElementKind::heading(9), ElementKind::Heading6);
        assert_eq!(ElementKind::heading(0), ElementKind::Heading1);
    }

    #[test]
    fn test_void_elements() {
        assert!(ElementKind::Image.is_void());
        assert!(ElementKind::Rule.is_void());
        assert!(!ElementKind::Paragraph.is_void());
    }
}
