//! Site generation from a directory of documents.

use anyhow::{Context, Result, bail};
use maud::Markup;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::assets::write_css_assets;
use crate::components::layout::{PageMeta, page_wrapper};
use crate::components::nav::table_of_contents;
use crate::config::Config;
use crate::highlight::theme_css;
use crate::markdown::{Document, MarkdownRenderer, RouteResolver};
use crate::site::SiteConfig;
use crate::styles::UtilitySet;
use crate::util::{is_hidden, root_prefix};

/// Directory under the output root holding generated stylesheets.
pub const ASSETS_DIR: &str = "assets";

/// Outcome of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages compiled and written
    pub pages: usize,
    /// Pages left out because they failed to compile or their output path
    /// was already taken
    pub skipped: usize,
    /// Distinct utility classes emitted into the site stylesheet
    pub utilities: usize,
}

/// Generates a complete HTML page for a compiled document.
///
/// # Arguments
///
/// * `document`: Compiled document
/// * `site`: Site configuration supplying the site title
/// * `page`: Output path relative to the site root, used for asset links
///
/// # Returns
///
/// Complete HTML page with table of contents when the document has enough
/// headings
pub fn generate_page(document: &Document, site: &SiteConfig, page: &Path) -> Markup {
    let fallback = page
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let title = document.title().unwrap_or(fallback);
    let root = root_prefix(page);

    let meta = PageMeta {
        title,
        site_title: &site.title,
        description: document.front_matter.description.as_deref(),
        root: &root,
    };

    page_wrapper(
        &meta,
        table_of_contents(&document.headings),
        document.body_markup(),
    )
}

/// Output path for a source page: same relative path with `.html`.
pub fn output_path(page: &Path) -> PathBuf {
    page.with_extension("html")
}

/// Finds page files below the source directory.
///
/// Hidden entries and the output directory are skipped. Symbolic links to
/// files are included; links to directories are not followed. Entries that
/// cannot be read are logged and skipped.
///
/// # Returns
///
/// Paths relative to the source directory, sorted
///
/// # Errors
///
/// Returns error if the source is not a directory
pub fn discover_pages(source: &Path, output: &Path, site: &SiteConfig) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        bail!("Source path is not a directory: {}", source.display());
    }

    let output = fs::canonicalize(output).ok();
    let is_output = |entry: &DirEntry| {
        entry.file_type().is_dir()
            && output.is_some()
            && fs::canonicalize(entry.path()).ok() == output
    };

    let walker = WalkDir::new(source)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry) && !is_output(entry));

    let mut pages = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() || !path.is_file() || !site.is_page(path) {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(source) {
            pages.push(relative.to_path_buf());
        }
    }

    pages.sort();
    Ok(pages)
}

/// Builds the site described by the command line and site configuration.
///
/// Compiles every page into the output directory, then writes the utility
/// stylesheet (classes found in the generated pages and configured content
/// paths) and the highlight theme stylesheet. A page that fails to compile
/// is logged and skipped; the rest of the site is still built. When two
/// pages map to the same output file (`a.md` and `a.mdx`), the first in
/// sorted order is built and the other is skipped.
///
/// # Errors
///
/// Returns error if the highlight theme is unknown (checked before any page
/// is written), or the output directory or an asset cannot be written
pub fn build_site(config: &Config, site: &SiteConfig) -> Result<BuildReport> {
    site.validate()?;
    let highlight_css = theme_css(&site.styles.theme)?;
    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let renderer = MarkdownRenderer::with_routes(RouteResolver::new(site.page_extensions()))
        .native(site.build.native_compile);

    let pages = discover_pages(&config.source, &config.output, site)?;
    log::info!("Found {} pages in {}", pages.len(), config.source.display());

    let mut report = BuildReport::default();
    let mut utilities = UtilitySet::new();
    let mut claimed = HashSet::new();

    for page in &pages {
        let target = output_path(page);
        if !claimed.insert(target.clone()) {
            log::warn!(
                "Skipping {}: {} is already generated from another page",
                page.display(),
                target.display()
            );
            report.skipped += 1;
            continue;
        }

        let document = match renderer.compile_file(config.source.join(page)) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Skipping {}: {:#}", page.display(), e);
                report.skipped += 1;
                continue;
            }
        };

        let html = generate_page(&document, site, &target).into_string();
        utilities.scan_text(&html);

        let destination = config.output.join(&target);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&destination, html)
            .with_context(|| format!("Failed to write {}", destination.display()))?;

        log::debug!("Generated {}", destination.display());
        report.pages += 1;
    }

    for content in &site.styles.content {
        let path = config.source.join(content);
        if !path.exists() {
            log::warn!("Style content path not found: {}", path.display());
            continue;
        }
        utilities.scan_path(&path)?;
    }

    write_css_assets(&config.output.join(ASSETS_DIR), &utilities, &highlight_css)?;
    report.utilities = utilities.len();

    Ok(report)
}
