//! Utility functions for stylemark

use std::path::Path;
use walkdir::DirEntry;

/// Escapes HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Decodes the HTML entities produced by [`escape_html`].
///
/// Used on text lifted out of raw HTML in documents, where authors write
/// `&amp;` and friends.
pub fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Converts heading text into a fragment identifier.
///
/// Lowercases alphanumerics, turns whitespace, hyphens and underscores into
/// single hyphens and drops everything else.
///
/// # Examples
///
/// ```no_run
/// use stylemark::slugify;
///
/// assert_eq!(slugify("Getting Started!"), "getting-started");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Relative prefix leading from a page back to the site root.
///
/// # Arguments
///
/// * `page`: Output page path relative to the site root
///
/// # Returns
///
/// `""` for root level pages, otherwise one `../` per parent directory
pub fn root_prefix(page: &Path) -> String {
    let depth = page
        .parent()
        .map(|parent| parent.components().count())
        .unwrap_or(0);
    "../".repeat(depth)
}

/// Whether a walked entry below the walk root is hidden (name starts with `.`).
///
/// The walk root itself is never hidden, so sources such as `.site/` can
/// still be built.
pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
