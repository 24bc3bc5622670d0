//! Site build configuration loaded from `stylemark.toml`.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the source directory.
pub const CONFIG_FILE: &str = "stylemark.toml";

/// Site build configuration.
///
/// Every field has a default, so an empty or missing file is valid:
///
/// ```toml
/// title = "Docs"
///
/// [build]
/// page_extensions = ["md", "markdown", "mdx"]
/// native_compile = true
///
/// [styles]
/// content = ["content", "templates"]
/// theme = "InspiredGitHub"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header and appended to page titles
    pub title: String,
    pub build: BuildConfig,
    pub styles: StyleConfig,
}

/// Document compilation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// File extensions (without dot) treated as document pages
    pub page_extensions: Vec<String>,
    /// Render through the styled component map; `false` uses comrak's stock
    /// unstyled HTML
    pub native_compile: bool,
}

/// Utility style generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Files or directories, relative to the source directory, scanned for
    /// utility class names in addition to the generated pages
    pub content: Vec<PathBuf>,
    /// Syntect theme used for the highlight stylesheet
    pub theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Site".to_string(),
            build: BuildConfig::default(),
            styles: StyleConfig::default(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            page_extensions: vec!["md".to_string(), "markdown".to_string(), "mdx".to_string()],
            native_compile: true,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            theme: "InspiredGitHub".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML, contains unknown keys, or
    /// fails validation
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text).context("Failed to parse site configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if no page extension is configured or one is empty or
    /// is `html`, which would make outputs collide with sources.
    pub fn validate(&self) -> Result<()> {
        if self.build.page_extensions.is_empty() {
            bail!("At least one page extension must be configured");
        }

        for ext in &self.build.page_extensions {
            let normalized = ext.trim_start_matches('.');
            if normalized.is_empty() {
                bail!("Page extensions must not be empty");
            }
            if normalized.eq_ignore_ascii_case("html") {
                bail!("Page extension 'html' would overwrite sources with output");
            }
        }

        Ok(())
    }

    /// Page extensions without leading dots, lowercased.
    pub fn page_extensions(&self) -> Vec<String> {
        self.build
            .page_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    /// Whether the path has one of the configured page extensions.
    pub fn is_page(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.page_extensions().iter().any(|e| *e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Act
        let config = SiteConfig::default();

        // Assert
        assert_eq!(config.build.page_extensions, vec!["md", "markdown", "mdx"]);
        assert!(config.build.native_compile);
        assert!(config.styles.content.is_empty());
        assert_eq!(config.styles.theme, "InspiredGitHub");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        // Act
        let config = SiteConfig::from_toml("").expect("Empty config is valid");

        // Assert
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        // Arrange
        let text = r#"
title = "Handbook"

[build]
page_extensions = ["md"]

[styles]
content = ["templates"]
"#;

        // Act
        let config = SiteConfig::from_toml(text).expect("Should parse");

        // Assert
        assert_eq!(config.title, "Handbook");
        assert_eq!(config.build.page_extensions, vec!["md"]);
        assert!(config.build.native_compile, "Unset keys keep defaults");
        assert_eq!(config.styles.content, vec![PathBuf::from("templates")]);
        assert_eq!(config.styles.theme, "InspiredGitHub");
    }

    #[test]
    fn test_unknown_key_rejected() {
        // Act
        let result = SiteConfig::from_toml("[build]\nmdx_rs = true\n");

        // Assert
        assert!(result.is_err(), "Unknown keys should be rejected");
    }

    #[test]
    fn test_validate_rejects_html_extension() {
        // Act
        let result = SiteConfig::from_toml("[build]\npage_extensions = [\".html\"]\n");

        // Assert
        let err = format!("{:#}", result.expect_err("html must be rejected"));
        assert!(err.contains("html"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        assert!(SiteConfig::from_toml("[build]\npage_extensions = []\n").is_err());
        assert!(SiteConfig::from_toml("[build]\npage_extensions = [\"\"]\n").is_err());
    }

    #[test]
    fn test_is_page() {
        // Arrange
        let config = SiteConfig::from_toml("[build]\npage_extensions = [\".md\", \"MDX\"]\n")
            .expect("Should parse");

        // Act & Assert
        assert!(config.is_page(Path::new("docs/intro.md")));
        assert!(config.is_page(Path::new("docs/intro.MD")));
        assert!(config.is_page(Path::new("blog/post.mdx")));
        assert!(!config.is_page(Path::new("notes.txt")));
        assert!(!config.is_page(Path::new("README")));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        // Act
        let config = SiteConfig::load("definitely/missing/stylemark.toml")
            .expect("Missing file should use defaults");

        // Assert
        assert_eq!(config, SiteConfig::default());
    }
}
