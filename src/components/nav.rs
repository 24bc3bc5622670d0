//! Table of contents navigation component

use maud::{Markup, html};

use crate::markdown::Heading;

/// Minimum number of headings before a page gets a table of contents.
pub const MIN_HEADINGS_FOR_TOC: usize = 2;

/// Renders table of contents for a page
///
/// Lists headings as in-page fragment links, indented by level relative to
/// the shallowest heading on the page. Pages with fewer than
/// [`MIN_HEADINGS_FOR_TOC`] headings get no navigation.
///
/// # Arguments
///
/// * `headings`: Page outline in document order
///
/// # Returns
///
/// Navigation markup, or None when the outline is too short
pub fn table_of_contents(headings: &[Heading]) -> Option<Markup> {
    if headings.len() < MIN_HEADINGS_FOR_TOC {
        return None;
    }

    let base = headings.iter().map(|h| h.level).min().unwrap_or(1);

    Some(html! {
        nav class="mb-8 rounded-lg bg-gray-50 p-4 text-sm" aria-label="Contents" {
            p class="mb-2 font-semibold text-gray-900" { "Contents" }
            ul {
                @for heading in headings {
                    li class=(indent_class(heading.level - base)) {
                        a href=(format!("#{}", heading.id)) class="text-gray-600 hover:text-blue-800" {
                            (heading.text)
                        }
                    }
                }
            }
        }
    })
}

fn indent_class(depth: u8) -> &'static str {
    match depth {
        0 => "py-0.5",
        1 => "py-0.5 pl-4",
        2 => "py-0.5 pl-8",
        _ => "py-0.5 pl-12",
    }
}
