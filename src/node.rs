//! Renderable nodes produced by the component map.

use maud::{Markup, PreEscaped, Render};

use crate::util::escape_html;

/// Ordered list of HTML attributes.
///
/// Setting a name that is already present replaces its value in place, so
/// attribute order stays stable while the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets attribute value, replacing any existing value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Removes attribute and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Applies every attribute of `other` on top of this list.
    ///
    /// Values from `other` win on collision.
    pub fn merge(mut self, other: Attributes) -> Self {
        for (name, value) in other.entries {
            self.set(name, value);
        }
        self
    }

    /// Iterates over name and value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn render_to(&self, buffer: &mut String) {
        for (name, value) in &self.entries {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            buffer.push_str(&escape_html(value));
            buffer.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Plain host element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

/// Link handled by client-side navigation instead of a full page load.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub attrs: Attributes,
    pub children: Vec<Node>,
}

impl NavLink {
    pub fn href(&self) -> &str {
        self.attrs.get("href").unwrap_or_default()
    }
}

/// Image with fixed dimensions and deferred loading.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedImage {
    pub attrs: Attributes,
}

impl OptimizedImage {
    pub fn src(&self) -> &str {
        self.attrs.get("src").unwrap_or_default()
    }
}

/// Highlighter output, already escaped and marked up.
///
/// Only the syntax highlighter can construct this, which keeps it the sole
/// source of pre-rendered markup in a node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedHtml(String);

impl HighlightedHtml {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renderable node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
    NavLink(NavLink),
    Image(OptimizedImage),
    Highlighted(HighlightedHtml),
}

impl Node {
    /// Creates plain host element.
    pub fn element(tag: &'static str, attrs: Attributes, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag,
            attrs,
            children,
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Host tag this node renders as, if it renders as a single element.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element(element) => Some(element.tag),
            Node::NavLink(_) => Some("a"),
            Node::Image(_) => Some("img"),
            Node::Text(_) | Node::Fragment(_) | Node::Highlighted(_) => None,
        }
    }

    /// Attributes of the rendered element, if any.
    pub fn attrs(&self) -> Option<&Attributes> {
        match self {
            Node::Element(element) => Some(&element.attrs),
            Node::NavLink(link) => Some(&link.attrs),
            Node::Image(image) => Some(&image.attrs),
            Node::Text(_) | Node::Fragment(_) | Node::Highlighted(_) => None,
        }
    }

    /// Shortcut for looking up a single attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().and_then(|attrs| attrs.get(name))
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::NavLink(link) => &link.children,
            Node::Fragment(children) => children,
            Node::Text(_) | Node::Image(_) | Node::Highlighted(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    ///
    /// Highlighted markup contributes nothing since it is not plain text.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        match self {
            Node::Text(t) => text.push_str(t),
            Node::Image(image) => text.push_str(image.attrs.get("alt").unwrap_or_default()),
            _ => {
                for child in self.children() {
                    child.collect_text(text);
                }
            }
        }
    }

    /// Renders the node to an HTML string.
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Node::Text(text) => buffer.push_str(&escape_html(text)),
            Node::Highlighted(html) => buffer.push_str(html.as_str()),
            Node::Fragment(children) => render_children(children, buffer),
            Node::Element(element) => {
                open_tag(buffer, element.tag, &element.attrs);
                if !is_void_tag(element.tag) {
                    render_children(&element.children, buffer);
                    close_tag(buffer, element.tag);
                }
            }
            Node::NavLink(link) => {
                let mut attrs = link.attrs.clone();
                if !attrs.contains("data-navigation") {
                    attrs.set("data-navigation", "client");
                }
                open_tag(buffer, "a", &attrs);
                render_children(&link.children, buffer);
                close_tag(buffer, "a");
            }
            Node::Image(image) => {
                let mut attrs = image.attrs.clone();
                if !attrs.contains("loading") {
                    attrs.set("loading", "lazy");
                }
                if !attrs.contains("decoding") {
                    attrs.set("decoding", "async");
                }
                open_tag(buffer, "img", &attrs);
            }
        }
    }
}

/// Renders a node sequence as one markup value.
pub fn render_nodes(nodes: &[Node]) -> Markup {
    let mut buffer = String::new();
    render_children(nodes, &mut buffer);
    PreEscaped(buffer)
}

fn render_children(children: &[Node], buffer: &mut String) {
    for child in children {
        child.render_to(buffer);
    }
}

fn open_tag(buffer: &mut String, tag: &str, attrs: &Attributes) {
    buffer.push('<');
    buffer.push_str(tag);
    attrs.render_to(buffer);
    buffer.push('>');
}

fn close_tag(buffer: &mut String, tag: &str) {
    buffer.push_str("</");
    buffer.push_str(tag);
    buffer.push('>');
}

fn is_void_tag(tag: &str) -> bool {
    matches!(tag, "img" | "hr" | "br")
}
