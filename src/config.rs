//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::site::{CONFIG_FILE, SiteConfig};

/// Command line configuration for stylemark.
#[derive(Debug, Clone, Parser)]
#[command(name = "stylemark", version, about, long_about = None)]
pub struct Config {
    /// Source directory containing documents
    #[arg(default_value = ".")]
    pub source: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site configuration file (defaults to stylemark.toml in the source directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Site title, overriding the configuration file
    #[arg(long)]
    pub title: Option<String>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long)]
    pub theme: Option<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.source.exists() {
            bail!("Source path does not exist: {}", self.source.display());
        }
        if !self.source.is_dir() {
            bail!("Source path is not a directory: {}", self.source.display());
        }

        Ok(())
    }

    /// Path of the site configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.source.join(CONFIG_FILE))
    }

    /// Loads the site configuration and applies command line overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration file exists but is invalid.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let path = self.config_path();
        let mut site = SiteConfig::load(&path)
            .with_context(|| format!("Failed to load site configuration {}", path.display()))?;

        if let Some(title) = &self.title {
            site.title = title.clone();
        }
        if let Some(theme) = &self.theme {
            site.styles.theme = theme.clone();
        }

        Ok(site)
    }
}
