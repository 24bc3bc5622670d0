//! Route resolution for internal page links.

use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};

/// Rewrites internal links to source documents into compiled page URLs.
///
/// Documents link to each other by source path (`/guide/setup.md`); the site
/// serves them as `.html`. Only paths starting with `/` are touched.
pub struct RouteResolver {
    page_extensions: Vec<String>,
}

impl RouteResolver {
    /// Creates resolver for the given page file extensions (without dot).
    pub fn new<I, S>(page_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            page_extensions: page_extensions
                .into_iter()
                .map(|ext| ext.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Resolves an internal link to its site URL.
    ///
    /// Handles different link types:
    /// - Non-internal links (`#x`, `https://...`, `docs/x`) remain unchanged
    /// - Paths with a page extension get `.html` instead
    /// - Other paths are normalized but keep their extension
    /// - Query strings and fragments are carried over
    ///
    /// # Arguments
    ///
    /// * `href`: Link destination from the document
    ///
    /// # Returns
    ///
    /// Resolved URL for the static site
    ///
    /// # Errors
    ///
    /// Returns error if the path escapes the site root or contains invalid UTF8
    pub fn resolve(&self, href: &str) -> Result<String> {
        if !href.starts_with('/') || href.starts_with("//") {
            return Ok(href.to_string());
        }

        let suffix_start = href.find(['?', '#']).unwrap_or(href.len());
        let (path, suffix) = href.split_at(suffix_start);

        let normalized = self
            .normalize_path(Path::new(path))
            .context("Failed to normalize path")?;

        let is_page = normalized
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.is_page_extension(ext));

        let resolved = if is_page {
            normalized.with_extension("html")
        } else {
            normalized
        };

        let path_str = resolved.to_str().context("Path contains invalid UTF8")?;
        let trailing = if path.len() > 1 && path.ends_with('/') {
            "/"
        } else {
            ""
        };

        if path_str.is_empty() {
            return Ok(format!("/{}", suffix));
        }

        Ok(format!("/{}{}{}", path_str, trailing, suffix))
    }

    /// Whether the extension marks a source document.
    pub fn is_page_extension(&self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.page_extensions.iter().any(|e| *e == ext)
    }

    /// Normalizes path by resolving .. and . components.
    ///
    /// Security: Prevents traversal outside the site root.
    ///
    /// # Errors
    ///
    /// Returns error if path attempts to escape the site root
    fn normalize_path(&self, path: &Path) -> Result<PathBuf> {
        let mut components = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(c) => {
                    components.push(c);
                }
                Component::ParentDir => {
                    if components.is_empty() {
                        bail!("Path escapes site root: {}", path.display());
                    }
                    components.pop();
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }

        Ok(components.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> RouteResolver {
        RouteResolver::new(["md", "markdown"])
    }

    #[test]
    fn test_resolve_page_link() {
        // Act
        let result = resolver()
            .resolve("/guide/setup.md")
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "/guide/setup.html");
    }

    #[test]
    fn test_resolve_keeps_fragment_and_query() {
        // Act
        let with_fragment = resolver()
            .resolve("/guide/setup.md#linux")
            .expect("Should resolve");
        let with_query = resolver()
            .resolve("/search.md?q=x")
            .expect("Should resolve");

        // Assert
        assert_eq!(with_fragment, "/guide/setup.html#linux");
        assert_eq!(with_query, "/search.html?q=x");
    }

    #[test]
    fn test_resolve_non_page_unchanged() {
        // Act
        let asset = resolver()
            .resolve("/images/logo.png")
            .expect("Should resolve");
        let route = resolver().resolve("/about").expect("Should resolve");

        // Assert
        assert_eq!(asset, "/images/logo.png");
        assert_eq!(route, "/about");
    }

    #[test]
    fn test_resolve_external_and_fragment_unchanged() {
        // Arrange
        let resolver = resolver();

        // Act & Assert
        assert_eq!(
            resolver.resolve("https://example.com/a.md").expect("pass"),
            "https://example.com/a.md"
        );
        assert_eq!(resolver.resolve("#section").expect("pass"), "#section");
        assert_eq!(
            resolver.resolve("//cdn.example.com/a.md").expect("pass"),
            "//cdn.example.com/a.md"
        );
    }

    #[test]
    fn test_resolve_normalizes_dots() {
        // Act
        let result = resolver()
            .resolve("/guide/./old/../setup.markdown")
            .expect("Should resolve");

        // Assert
        assert_eq!(result, "/guide/setup.html");
    }

    #[test]
    fn test_resolve_root_and_directories() {
        // Arrange
        let resolver = resolver();

        // Act & Assert
        assert_eq!(resolver.resolve("/").expect("root"), "/");
        assert_eq!(resolver.resolve("/#top").expect("root"), "/#top");
        assert_eq!(resolver.resolve("/guide/").expect("dir"), "/guide/");
    }

    #[test]
    fn test_reject_traversal_attack() {
        // Act
        let result = resolver().resolve("/../../etc/passwd");

        // Assert
        assert!(result.is_err(), "Should reject path escaping site root");
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("escapes"), "Error should explain: {}", err_msg);
    }

    #[test]
    fn test_extension_case_insensitive() {
        // Act
        let result = resolver().resolve("/README.MD").expect("Should resolve");

        // Assert
        assert_eq!(result, "/README.html");
    }
}
