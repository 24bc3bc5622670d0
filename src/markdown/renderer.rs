//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{Arena, Options};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::tags::{self, Token};
use super::{Body, Document, Heading, RouteResolver, frontmatter};
use crate::components::code::LANGUAGE_ATTR;
use crate::components::table::{ALIGN_ATTR, TableData};
use crate::element::ElementKind;
use crate::node::{Attributes, Node};
use crate::registry::{ComponentMap, components};
use crate::util::slugify;

/// Info string that marks a fenced block as table shorthand.
const TABLE_FENCE: &str = "table";

/// Renders markdown to styled HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks and
/// superscript. Every element is rendered through the process-wide
/// component map; code blocks are highlighted with syntect. Raw HTML is
/// never passed through: the component tags (`details`, `summary`, `sub`,
/// `sup`, `br`) are routed through the component map and everything else is
/// dropped.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    routes: Option<RouteResolver>,
    native: bool,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures the GFM extensions and security settings:
    /// - Tables, strikethrough, autolinks, superscript
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML omitted by the stock renderer (plain mode)
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.superscript = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (plain mode only): keep raw HTML out
        options.render.unsafe_ = false;

        Self {
            options,
            routes: None,
            native: true,
        }
    }

    /// Creates renderer that rewrites internal links to compiled pages.
    ///
    /// Internal anchors (`/guide/setup.md`) pointing at a page extension are
    /// rewritten to their `.html` URL before rendering.
    pub fn with_routes(routes: RouteResolver) -> Self {
        let mut renderer = Self::new();
        renderer.routes = Some(routes);
        renderer
    }

    /// Selects native compilation through the component map (default) or
    /// comrak's stock, unstyled HTML renderer.
    pub fn native(mut self, native: bool) -> Self {
        self.native = native;
        self
    }

    /// Compiles markdown content into a document.
    ///
    /// Splits off front matter, parses the body into an AST and renders each
    /// element through the component map.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content, optionally starting with `+++` front matter
    ///
    /// # Errors
    ///
    /// Returns error if the front matter is not valid TOML
    pub fn compile(&self, content: &str) -> Result<Document> {
        let (front_matter, body) = frontmatter::split(content)?;

        if !self.native {
            return Ok(Document {
                front_matter,
                headings: Vec::new(),
                body: Body::Plain(comrak::markdown_to_html(body, &self.options)),
            });
        }

        let arena = Arena::new();
        let root = comrak::parse_document(&arena, body, &self.options);

        let mut walker = Walker::new(components(), self.routes.as_ref());
        let nodes = walker.children(root);

        Ok(Document {
            front_matter,
            headings: walker.headings,
            body: Body::Components(nodes),
        })
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns error if the front matter is not valid TOML
    pub fn render(&self, content: &str) -> Result<String> {
        Ok(self.compile(content)?.to_html())
    }

    /// Compiles markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or its front matter is invalid
    pub fn compile_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file {}", path.display()))?;
        self.compile(&content)
            .with_context(|| format!("Failed to compile {}", path.display()))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Component tags opened by raw HTML and not yet closed.
///
/// Nodes produced while a tag is open become its children.
struct Frames {
    root: Vec<Node>,
    open: Vec<(ElementKind, Attributes, Vec<Node>)>,
}

impl Frames {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            open: Vec::new(),
        }
    }

    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some((_, _, children)) => children.push(node),
            None => self.root.push(node),
        }
    }

    fn open(&mut self, kind: ElementKind, attrs: Attributes) {
        self.open.push((kind, attrs, Vec::new()));
    }

    /// Closes the innermost open tag of `kind`, closing anything nested in it.
    ///
    /// A close tag with no matching open tag is ignored.
    fn close(&mut self, kind: ElementKind, components: &ComponentMap) {
        if !self.open.iter().any(|(k, _, _)| *k == kind) {
            log::debug!("Ignoring unmatched closing tag </{}>", kind.tag());
            return;
        }

        while let Some((open_kind, attrs, children)) = self.open.pop() {
            let node = components.render(open_kind, attrs, children);
            self.push(node);
            if open_kind == kind {
                break;
            }
        }
    }

    /// Closes every tag still open and returns the finished nodes.
    fn finish(mut self, components: &ComponentMap) -> Vec<Node> {
        while let Some((kind, attrs, children)) = self.open.pop() {
            log::debug!("Closing unterminated <{}>", kind.tag());
            let node = components.render(kind, attrs, children);
            self.push(node);
        }
        self.root
    }
}

/// Walks the comrak AST and renders it through the component map.
struct Walker<'r> {
    components: &'static ComponentMap,
    routes: Option<&'r RouteResolver>,
    headings: Vec<Heading>,
    /// Next suffix to try per base slug
    slugs: HashMap<String, usize>,
    /// Every id handed out so far
    issued: HashSet<String>,
}

impl<'r> Walker<'r> {
    fn new(components: &'static ComponentMap, routes: Option<&'r RouteResolver>) -> Self {
        Self {
            components,
            routes,
            headings: Vec::new(),
            slugs: HashMap::new(),
            issued: HashSet::new(),
        }
    }

    fn children<'a>(&mut self, node: &'a AstNode<'a>) -> Vec<Node> {
        let mut frames = Frames::new();
        for child in node.children() {
            self.visit(child, &mut frames);
        }
        frames.finish(self.components)
    }

    fn visit<'a>(&mut self, node: &'a AstNode<'a>, frames: &mut Frames) {
        let value = node.data.borrow().value.clone();

        match value {
            NodeValue::HtmlInline(raw) => self.raw_html(&raw, frames),
            NodeValue::HtmlBlock(block) => self.raw_html(&block.literal, frames),
            value => {
                if let Some(rendered) = self.convert(node, value) {
                    frames.push(rendered);
                }
            }
        }
    }

    fn render(&self, kind: ElementKind, attrs: Attributes, children: Vec<Node>) -> Node {
        self.components.render(kind, attrs, children)
    }

    fn convert<'a>(&mut self, node: &'a AstNode<'a>, value: NodeValue) -> Option<Node> {
        let rendered = match value {
            NodeValue::FrontMatter(_) => return None,
            NodeValue::Text(text) => Node::Text(text),
            NodeValue::SoftBreak => Node::text("\n"),
            NodeValue::LineBreak => self.render(ElementKind::LineBreak, Attributes::new(), vec![]),
            NodeValue::Heading(heading) => {
                let children = self.children(node);
                let text = Node::Fragment(children.clone()).text_content();
                let id = self.unique_slug(&text);
                self.headings.push(Heading {
                    level: heading.level,
                    id: id.clone(),
                    text: text.trim().to_string(),
                });
                let attrs = Attributes::new().with("id", id);
                self.render(ElementKind::heading(heading.level), attrs, children)
            }
            NodeValue::Paragraph => {
                let children = self.children(node);
                if in_tight_list(node) {
                    Node::Fragment(children)
                } else {
                    self.render(ElementKind::Paragraph, Attributes::new(), children)
                }
            }
            NodeValue::List(list) => {
                let children = self.children(node);
                match list.list_type {
                    ListType::Bullet => {
                        self.render(ElementKind::UnorderedList, Attributes::new(), children)
                    }
                    ListType::Ordered => {
                        let mut attrs = Attributes::new();
                        if list.start != 1 {
                            attrs.set("start", list.start.to_string());
                        }
                        self.render(ElementKind::OrderedList, attrs, children)
                    }
                }
            }
            NodeValue::Item(_) => {
                let children = self.children(node);
                self.render(ElementKind::ListItem, Attributes::new(), children)
            }
            NodeValue::Emph => self.container(ElementKind::Emphasis, node),
            NodeValue::Strong => self.container(ElementKind::Strong, node),
            NodeValue::Strikethrough => self.container(ElementKind::Strikethrough, node),
            NodeValue::Superscript => self.container(ElementKind::Superscript, node),
            NodeValue::BlockQuote => self.container(ElementKind::Blockquote, node),
            NodeValue::ThematicBreak => self.render(ElementKind::Rule, Attributes::new(), vec![]),
            NodeValue::Code(code) => self.render(
                ElementKind::InlineCode,
                Attributes::new(),
                vec![Node::Text(code.literal)],
            ),
            NodeValue::CodeBlock(block) => self.code_block(&block.info, block.literal),
            NodeValue::Link(link) => {
                let children = self.children(node);
                let mut attrs = Attributes::new().with("href", self.resolve_route(&link.url));
                if !link.title.is_empty() {
                    attrs.set("title", link.title);
                }
                self.render(ElementKind::Anchor, attrs, children)
            }
            NodeValue::Image(link) => {
                let alt = Node::Fragment(self.children(node)).text_content();
                let mut attrs = Attributes::new()
                    .with("src", link.url)
                    .with("alt", alt);
                if !link.title.is_empty() {
                    attrs.set("title", link.title);
                }
                self.render(ElementKind::Image, attrs, vec![])
            }
            NodeValue::Table(table) => self.table(node, &table.alignments),
            _ => Node::Fragment(self.children(node)),
        };

        Some(rendered)
    }

    fn container<'a>(&mut self, kind: ElementKind, node: &'a AstNode<'a>) -> Node {
        let children = self.children(node);
        self.render(kind, Attributes::new(), children)
    }

    /// Renders a fenced or indented code block.
    ///
    /// Blocks fenced as `table` hold JSON table data and expand through the
    /// table shorthand; if the JSON does not parse they render as code.
    fn code_block(&self, info: &str, literal: String) -> Node {
        let language = info.split_whitespace().next().unwrap_or_default();

        if language == TABLE_FENCE {
            match serde_json::from_str::<TableData>(&literal) {
                Ok(data) => return data.expand(),
                Err(e) => log::warn!("Invalid table data, rendering as code: {}", e),
            }
        }

        let mut attrs = Attributes::new();
        if !language.is_empty() {
            attrs.set(LANGUAGE_ATTR, language);
        }
        self.render(ElementKind::CodeBlock, attrs, vec![Node::Text(literal)])
    }

    /// Renders a GFM table, grouping header rows into `thead` and the rest
    /// into `tbody`. Column alignments are passed to each cell.
    fn table<'a>(&mut self, node: &'a AstNode<'a>, alignments: &[TableAlignment]) -> Node {
        let mut head = Vec::new();
        let mut body = Vec::new();

        for row in node.children() {
            let header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
            let cell_kind = if header {
                ElementKind::TableHeaderCell
            } else {
                ElementKind::TableCell
            };

            let cells = row
                .children()
                .enumerate()
                .map(|(column, cell)| {
                    let mut attrs = Attributes::new();
                    match alignments.get(column) {
                        Some(TableAlignment::Center) => attrs.set(ALIGN_ATTR, "center"),
                        Some(TableAlignment::Right) => attrs.set(ALIGN_ATTR, "right"),
                        _ => {}
                    }
                    let children = self.children(cell);
                    self.render(cell_kind, attrs, children)
                })
                .collect();
            let rendered = self.render(ElementKind::TableRow, Attributes::new(), cells);

            if header {
                head.push(rendered);
            } else {
                body.push(rendered);
            }
        }

        let mut sections = Vec::with_capacity(2);
        if !head.is_empty() {
            sections.push(self.render(ElementKind::TableHead, Attributes::new(), head));
        }
        if !body.is_empty() {
            sections.push(self.render(ElementKind::TableBody, Attributes::new(), body));
        }
        self.render(ElementKind::Table, Attributes::new(), sections)
    }

    fn raw_html(&mut self, raw: &str, frames: &mut Frames) {
        for token in tags::tokenize(raw) {
            match token {
                Token::Open(kind, attrs) => frames.open(kind, attrs),
                Token::Close(kind) => frames.close(kind, self.components),
                Token::Empty(kind, attrs) => frames.push(self.render(kind, attrs, vec![])),
                Token::Text(text) => frames.push(Node::Text(text)),
                Token::Unsupported(markup) => log::debug!("Dropping raw HTML: {}", markup),
            }
        }
    }

    fn resolve_route(&self, href: &str) -> String {
        let Some(routes) = self.routes else {
            return href.to_string();
        };

        routes.resolve(href).unwrap_or_else(|e| {
            log::warn!("Keeping link {} as written: {:#}", href, e);
            href.to_string()
        })
    }

    /// Slug for a heading, suffixed with a counter when already taken.
    ///
    /// Suffixed ids are checked against every id issued so far, so
    /// `Setup`, `Setup`, `Setup 1` yield `setup`, `setup-1`, `setup-1-1`.
    fn unique_slug(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_string();
        }

        let mut count = self.slugs.get(&base).copied().unwrap_or(0);
        let mut slug = if count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        while self.issued.contains(&slug) {
            count += 1;
            slug = format!("{}-{}", base, count);
        }

        self.slugs.insert(base, count + 1);
        self.issued.insert(slug.clone());
        slug
    }
}

/// Whether a paragraph sits directly in an item of a tight list.
///
/// Tight lists render their paragraphs without a wrapping element.
fn in_tight_list<'a>(node: &'a AstNode<'a>) -> bool {
    let Some(item) = node.parent() else {
        return false;
    };
    if !matches!(item.data.borrow().value, NodeValue::Item(_)) {
        return false;
    }
    item.parent().is_some_and(
        |list| matches!(&list.data.borrow().value, NodeValue::List(list) if list.tight),
    )
}
