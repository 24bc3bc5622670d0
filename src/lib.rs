//! Markup rendering adapter and static site builder.
//!
//! Documents are parsed with comrak and every element is rendered through a
//! component map that attaches utility classes, routes links by target and
//! highlights code blocks. [`build_site`] compiles a directory of documents
//! into HTML pages with a generated utility stylesheet.

pub mod assets;
pub mod classify;
pub mod components;
pub mod config;
pub mod element;
pub mod generators;
pub mod highlight;
pub mod markdown;
pub mod node;
pub mod registry;
pub mod site;
pub mod styles;
pub mod util;

pub use classify::{AnchorTarget, ImageSource};
pub use components::table::TableData;
pub use config::Config;
pub use element::ElementKind;
pub use generators::{BuildReport, build_site, generate_page};
pub use highlight::{Highlighter, theme_css};
pub use markdown::{Body, Document, FrontMatter, Heading, MarkdownRenderer, RouteResolver};
pub use node::{Attributes, HighlightedHtml, NavLink, Node, OptimizedImage, render_nodes};
pub use registry::{ComponentMap, RenderFn, components};
pub use site::SiteConfig;
pub use styles::{UtilitySet, utility_rule};
pub use util::slugify;
