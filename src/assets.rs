//! CSS asset output

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::styles::UtilitySet;

/// File name of the utility stylesheet inside the assets directory.
pub const SITE_CSS_FILE: &str = "site.css";

/// File name of the syntax highlighting stylesheet inside the assets directory.
pub const HIGHLIGHT_CSS_FILE: &str = "highlight.css";

/// Writes the utility stylesheet and the highlight theme stylesheet (from
/// [`crate::highlight::theme_css`]) to the assets directory.
///
/// # Errors
///
/// Returns error if the directory or a file cannot be written
pub fn write_css_assets(
    assets_dir: &Path,
    utilities: &UtilitySet,
    highlight_css: &str,
) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;

    write_asset(assets_dir, SITE_CSS_FILE, &utilities.to_css())?;
    write_asset(assets_dir, HIGHLIGHT_CSS_FILE, highlight_css)?;

    log::debug!(
        "Wrote {} utility classes to {}",
        utilities.len(),
        assets_dir.display()
    );
    Ok(())
}

fn write_asset(dir: &Path, name: &str, css: &str) -> Result<()> {
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
