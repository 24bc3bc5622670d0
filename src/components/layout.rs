//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Stylesheet with the generated utility rules, relative to the site root.
pub const SITE_CSS: &str = "assets/site.css";
/// Stylesheet with the highlight theme, relative to the site root.
pub const HIGHLIGHT_CSS: &str = "assets/highlight.css";

/// Page level metadata for the wrapper.
pub struct PageMeta<'a> {
    /// Page title text (without site suffix)
    pub title: &'a str,
    /// Site title appended to the page title
    pub site_title: &'a str,
    pub description: Option<&'a str>,
    /// Relative prefix from the page back to the site root
    pub root: &'a str,
}

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all pages. The wrapper handles viewport configuration, charset, and
/// stylesheet loading while the caller provides page-specific body content
/// and an optional sidebar (the table of contents).
///
/// # Arguments
///
/// * `meta`: Title, description and root prefix for the page
/// * `sidebar`: Optional navigation markup shown beside the content
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(meta: &PageMeta<'_>, sidebar: Option<Markup>, body: Markup) -> Markup {
    let full_title = if meta.title.is_empty() || meta.title == meta.site_title {
        meta.site_title.to_string()
    } else {
        format!("{} - {}", meta.title, meta.site_title)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(description) = meta.description {
                    meta name="description" content=(description);
                }
                title { (full_title) }
                link rel="stylesheet" href=(format!("{}{}", meta.root, SITE_CSS));
                link rel="stylesheet" href=(format!("{}{}", meta.root, HIGHLIGHT_CSS));
            }
            body class="bg-white text-gray-800" {
                div class="mx-auto max-w-3xl px-4 py-8" {
                    header class="mb-8 border-b border-gray-200 pb-4" {
                        a href=(format!("{}index.html", meta.root)) class="text-sm font-semibold text-gray-600" {
                            (meta.site_title)
                        }
                    }
                    @if let Some(sidebar) = sidebar {
                        (sidebar)
                    }
                    main {
                        (body)
                    }
                }
            }
        }
    }
}
