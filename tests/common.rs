//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary document sites and reading the
//! generated output.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use stylemark::Config;
use tempfile::TempDir;

/// Writes a file below the root, creating parent directories.
///
/// # Errors
///
/// Returns error if a directory or the file cannot be written
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Creates a temporary site containing the given files.
///
/// # Arguments
///
/// * `files`: Pairs of path relative to the site root and file content
///
/// # Returns
///
/// Temporary directory holding the site sources
pub fn create_site(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (relative, content) in files {
        write_file(dir.path(), relative, content)?;
    }
    Ok(dir)
}

/// Build configuration reading from the site root and writing to `dist`.
pub fn build_config(site: &Path) -> Config {
    Config {
        source: site.to_path_buf(),
        output: site.join("dist"),
        config: None,
        title: None,
        theme: None,
    }
}

/// Reads a generated file below the output directory.
pub fn read_output(config: &Config, relative: &str) -> Result<String> {
    let path = config.output.join(relative);
    fs::read_to_string(&path).with_context(|| format!("Missing output {}", path.display()))
}
