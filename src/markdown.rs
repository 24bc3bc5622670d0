//! Markdown compilation through the component map.
//!
//! This module parses markdown with comrak (GitHub Flavored Markdown
//! extensions), walks the syntax tree and renders every element through the
//! styled component map. It also handles front matter, heading anchors,
//! internal route rewriting and the component tags authors write as raw
//! HTML.

mod frontmatter;
mod renderer;
mod routes;
mod tags;

use maud::{Markup, PreEscaped};

use crate::node::{Node, render_nodes};

pub use frontmatter::FrontMatter;
pub use renderer::MarkdownRenderer;
pub use routes::RouteResolver;

/// Entry of a document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    /// Fragment identifier assigned to the heading element
    pub id: String,
    pub text: String,
}

/// Compiled document body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Node tree rendered through the component map.
    Components(Vec<Node>),
    /// HTML from comrak's stock renderer, raw HTML omitted.
    Plain(String),
}

/// Compiled document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    /// Headings in document order
    pub headings: Vec<Heading>,
    pub body: Body,
}

impl Document {
    /// Page title: the front matter title, else the first top level heading.
    pub fn title(&self) -> Option<&str> {
        self.front_matter.title.as_deref().or_else(|| {
            self.headings
                .iter()
                .find(|h| h.level == 1)
                .map(|h| h.text.as_str())
        })
    }

    /// Body as markup for embedding in a page.
    pub fn body_markup(&self) -> Markup {
        match &self.body {
            Body::Components(nodes) => render_nodes(nodes),
            Body::Plain(html) => PreEscaped(html.clone()),
        }
    }

    /// Body as an HTML string.
    pub fn to_html(&self) -> String {
        self.body_markup().into_string()
    }
}
