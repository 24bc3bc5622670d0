//! Syntax highlighting with syntect.

use anyhow::{Context, Result};
use std::sync::OnceLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::node::HighlightedHtml;
use crate::util::escape_html;

/// CSS class prefix shared by highlighted spans and the theme stylesheet.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

static SHARED: OnceLock<Highlighter> = OnceLock::new();

/// Syntax highlighter producing HTML with CSS class names.
///
/// Output is a pure function of the source text and language token: no
/// inline styles, no scripts, and every piece of source text is escaped.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with syntect's default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Process-wide highlighter, loaded on first use.
    pub fn shared() -> &'static Highlighter {
        SHARED.get_or_init(Highlighter::new)
    }

    /// Highlights code block source.
    ///
    /// Looks up the syntax by token (`rust`, `py`) and then by file extension.
    /// Unknown or missing languages produce escaped plain text.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, language: Option<&str>) -> Result<HighlightedHtml> {
        if code.is_empty() {
            return Ok(HighlightedHtml::new(String::new()));
        }

        let syntax = language.and_then(|lang| {
            self.syntax_set
                .find_syntax_by_token(lang)
                .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
        });

        let Some(syntax) = syntax else {
            return Ok(HighlightedHtml::new(escape_html(code)));
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(HighlightedHtml::new(generator.finalize()))
    }

    /// Highlights code, degrading to escaped plain text on failure.
    pub fn highlight_or_escape(&self, code: &str, language: Option<&str>) -> HighlightedHtml {
        self.highlight(code, language).unwrap_or_else(|e| {
            log::warn!("Highlighting failed, rendering plain text: {:#}", e);
            HighlightedHtml::new(escape_html(code))
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the stylesheet matching highlighted spans for a theme.
///
/// # Arguments
///
/// * `theme_name`: Name of a syntect default theme (InspiredGitHub, base16-ocean.dark, ...)
///
/// # Errors
///
/// Returns error if the theme does not exist or CSS generation fails
pub fn theme_css(theme_name: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();
    let theme = themes.themes.get(theme_name).with_context(|| {
        let mut available: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        available.sort_unstable();
        format!(
            "Unknown highlight theme '{}' (available: {})",
            theme_name,
            available.join(", ")
        )
    })?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .with_context(|| format!("Failed to generate CSS for theme '{}'", theme_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust_keywords() {
        // Arrange
        let highlighter = Highlighter::shared();

        // Act
        let html = highlighter
            .highlight("fn main() {}\n", Some("rust"))
            .expect("Highlighting should succeed");

        // Assert
        assert!(
            html.as_str().contains("<span class=\"hljs-"),
            "Should contain highlight spans: {}",
            html.as_str()
        );
        assert!(html.as_str().contains("main"));
    }

    #[test]
    fn test_highlight_by_extension() {
        // Arrange
        let highlighter = Highlighter::shared();

        // Act
        let html = highlighter
            .highlight("x = 1\n", Some("py"))
            .expect("Highlighting should succeed");

        // Assert
        assert!(html.as_str().contains("hljs-"));
    }

    #[test]
    fn test_highlight_unknown_language_fallback() {
        // Arrange
        let highlighter = Highlighter::shared();

        // Act
        let html = highlighter
            .highlight("some <code>", Some("unknownlang"))
            .expect("Should fall back to plain text");

        // Assert
        assert_eq!(html.as_str(), "some &lt;code&gt;");
    }

    #[test]
    fn test_highlight_without_language_escapes() {
        // Arrange
        let highlighter = Highlighter::shared();

        // Act
        let html = highlighter
            .highlight("<script>alert('x')</script>", None)
            .expect("Should escape plain text");

        // Assert
        assert!(!html.as_str().contains("<script>"));
        assert!(html.as_str().contains("&lt;script&gt;"));
    }

    #[test]
    fn test_highlight_escapes_markup_in_known_language() {
        // Arrange
        let highlighter = Highlighter::shared();
        let code = "const x = \"<script>alert('xss')</script>\";\n";

        // Act
        let html = highlighter
            .highlight(code, Some("javascript"))
            .expect("Highlighting should succeed");

        // Assert
        assert!(
            !html.as_str().contains("<script>"),
            "Source markup must be escaped: {}",
            html.as_str()
        );
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange
        let highlighter = Highlighter::shared();

        // Act
        let html = highlighter
            .highlight("", Some("rust"))
            .expect("Should handle empty code");

        // Assert
        assert_eq!(html.as_str(), "");
    }

    #[test]
    fn test_highlight_is_deterministic() {
        // Arrange
        let highlighter = Highlighter::shared();
        let code = "let s = \"hello\";\n";

        // Act
        let first = highlighter.highlight_or_escape(code, Some("rust"));
        let second = highlighter.highlight_or_escape(code, Some("rust"));

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_theme_css_default_theme() {
        // Act
        let css = theme_css("InspiredGitHub").expect("Default theme should exist");

        // Assert
        assert!(css.contains(".hljs-"), "CSS should use class prefix");
    }

    #[test]
    fn test_theme_css_unknown_theme() {
        // Act
        let result = theme_css("No-Such-Theme");

        // Assert
        let err = result.expect_err("Unknown theme should fail");
        assert!(err.to_string().contains("No-Such-Theme"));
    }
}
