//! Utility class stylesheet generation.
//!
//! Scans text for utility class names (`mb-4`, `text-gray-600`,
//! `hover:text-blue-800`) and emits one CSS rule per recognised class. Text
//! is split into candidate tokens without understanding its syntax, so the
//! same scanner works on generated pages, templates and source files.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

use crate::util::is_hidden;

static CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_:.\-/]+").expect("candidate pattern is valid"));

/// Base rules emitted before any utility, so border utilities only need to
/// set a width.
const PREFLIGHT: &str = "*, ::before, ::after { box-sizing: border-box; border-width: 0; border-style: solid; border-color: #e5e7eb; }\n\
body { margin: 0; font-family: ui-sans-serif, system-ui, sans-serif; line-height: 1.5; }\n\
h1, h2, h3, h4, h5, h6, p, blockquote, pre, figure { margin: 0; }\n\
ul, ol { margin: 0; padding: 0; }\n\
img { display: block; max-width: 100%; height: auto; }\n\
table { border-collapse: collapse; }\n";

const MONO_STACK: &str =
    "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace";

/// Variant prefixes and the pseudo-class they add to the selector.
const VARIANTS: &[(&str, &str)] = &[("hover:", ":hover"), ("focus:", ":focus")];

/// Set of utility classes found in scanned text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilitySet {
    classes: BTreeSet<String>,
}

impl UtilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every recognised utility class found in the text.
    pub fn scan_text(&mut self, text: &str) {
        for candidate in CANDIDATE.find_iter(text) {
            let token = candidate.as_str().trim_end_matches('.');
            if !self.classes.contains(token) && utility_rule(token).is_some() {
                self.classes.insert(token.to_string());
            }
        }
    }

    /// Scans a file, or every file below a directory.
    ///
    /// Files that are not valid UTF-8 are skipped. Hidden entries (names
    /// starting with `.`) are not descended into, and links to directories
    /// are not followed.
    ///
    /// # Errors
    ///
    /// Returns error if a file cannot be read
    pub fn scan_path(&mut self, path: &Path) -> Result<()> {
        let walker = WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let file = entry.path();
            if entry.file_type().is_dir() || !file.is_file() {
                continue;
            }

            let bytes =
                fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
            match String::from_utf8(bytes) {
                Ok(text) => self.scan_text(&text),
                Err(_) => log::debug!("Skipping non UTF-8 file {}", file.display()),
            }
        }
        Ok(())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Generates the stylesheet: preflight, then base utilities in sorted
    /// order, then variant utilities so they win over their base class.
    pub fn to_css(&self) -> String {
        let mut css = String::from(PREFLIGHT);
        let (variants, base): (Vec<&String>, Vec<&String>) = self
            .classes
            .iter()
            .partition(|class| VARIANTS.iter().any(|(prefix, _)| class.starts_with(prefix)));

        for class in base.into_iter().chain(variants) {
            if let Some(rule) = utility_rule(class) {
                css.push_str(&rule);
                css.push('\n');
            }
        }

        css
    }
}

/// Returns the CSS rule for a utility class, or None if the class is not a
/// recognised utility.
///
/// # Examples
///
/// ```no_run
/// use stylemark::utility_rule;
///
/// assert_eq!(utility_rule("mb-4").as_deref(), Some(".mb-4 { margin-bottom: 1rem; }"));
/// assert_eq!(utility_rule("not-a-utility"), None);
/// ```
pub fn utility_rule(class: &str) -> Option<String> {
    let (base, pseudo) = VARIANTS
        .iter()
        .find_map(|(prefix, pseudo)| class.strip_prefix(prefix).map(|rest| (rest, *pseudo)))
        .unwrap_or((class, ""));

    let declarations = declarations(base)?;
    Some(format!(
        ".{}{} {{ {} }}",
        escape_selector(class),
        pseudo,
        declarations
    ))
}

/// Escapes characters that are not valid unescaped in a class selector.
fn escape_selector(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len());
    for ch in class.chars() {
        if matches!(ch, ':' | '.' | '/') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn declarations(class: &str) -> Option<String> {
    if let Some(decl) = static_declarations(class) {
        return Some(decl.to_string());
    }
    if let Some(decl) = font_family(class) {
        return Some(decl);
    }
    if let Some(decl) = spacing(class) {
        return Some(decl);
    }
    if let Some(decl) = font_size(class) {
        return Some(decl.to_string());
    }
    color(class)
}

fn static_declarations(class: &str) -> Option<&'static str> {
    let decl = match class {
        "italic" => "font-style: italic;",
        "underline" => "text-decoration-line: underline;",
        "line-through" => "text-decoration-line: line-through;",
        "list-disc" => "list-style-type: disc;",
        "list-decimal" => "list-style-type: decimal;",
        "font-normal" => "font-weight: 400;",
        "font-medium" => "font-weight: 500;",
        "font-semibold" => "font-weight: 600;",
        "font-bold" => "font-weight: 700;",
        "rounded" => "border-radius: 0.25rem;",
        "rounded-lg" => "border-radius: 0.5rem;",
        "border" => "border-width: 1px;",
        "border-t" => "border-top-width: 1px;",
        "border-b" => "border-bottom-width: 1px;",
        "border-l-4" => "border-left-width: 4px;",
        "border-collapse" => "border-collapse: collapse;",
        "w-full" => "width: 100%;",
        "max-w-3xl" => "max-width: 48rem;",
        "text-left" => "text-align: left;",
        "text-center" => "text-align: center;",
        "text-right" => "text-align: right;",
        "overflow-x-auto" => "overflow-x: auto;",
        "cursor-pointer" => "cursor: pointer;",
        "leading-6" => "line-height: 1.5rem;",
        "leading-7" => "line-height: 1.75rem;",
        "tracking-tight" => "letter-spacing: -0.025em;",
        "align-super" => "vertical-align: super;",
        "align-sub" => "vertical-align: sub;",
        "block" => "display: block;",
        "hidden" => "display: none;",
        _ => return None,
    };
    Some(decl)
}

fn font_size(class: &str) -> Option<&'static str> {
    let decl = match class {
        "text-xs" => "font-size: 0.75rem; line-height: 1rem;",
        "text-sm" => "font-size: 0.875rem; line-height: 1.25rem;",
        "text-base" => "font-size: 1rem; line-height: 1.5rem;",
        "text-lg" => "font-size: 1.125rem; line-height: 1.75rem;",
        "text-xl" => "font-size: 1.25rem; line-height: 1.75rem;",
        "text-2xl" => "font-size: 1.5rem; line-height: 2rem;",
        "text-3xl" => "font-size: 1.875rem; line-height: 2.25rem;",
        "text-4xl" => "font-size: 2.25rem; line-height: 2.5rem;",
        _ => return None,
    };
    Some(decl)
}

/// Margin and padding utilities on a 0.25rem scale (`mb-4`, `px-0.5`,
/// `mx-auto`).
fn spacing(class: &str) -> Option<String> {
    let (prefix, value) = class.split_once('-')?;

    let (property, sides): (&str, &[&str]) = match prefix {
        "m" => ("margin", &[""]),
        "mt" => ("margin", &["-top"]),
        "mb" => ("margin", &["-bottom"]),
        "ml" => ("margin", &["-left"]),
        "mr" => ("margin", &["-right"]),
        "mx" => ("margin", &["-left", "-right"]),
        "my" => ("margin", &["-top", "-bottom"]),
        "p" => ("padding", &[""]),
        "pt" => ("padding", &["-top"]),
        "pb" => ("padding", &["-bottom"]),
        "pl" => ("padding", &["-left"]),
        "pr" => ("padding", &["-right"]),
        "px" => ("padding", &["-left", "-right"]),
        "py" => ("padding", &["-top", "-bottom"]),
        _ => return None,
    };

    let amount = if value == "auto" && property == "margin" {
        "auto".to_string()
    } else {
        scale(value)?
    };

    Some(
        sides
            .iter()
            .map(|side| format!("{}{}: {};", property, side, amount))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Converts a spacing step to rem: whole steps up to 96 and the half steps
/// 0.5, 1.5, 2.5 and 3.5.
fn scale(value: &str) -> Option<String> {
    let step: f64 = match value {
        "0.5" => 0.5,
        "1.5" => 1.5,
        "2.5" => 2.5,
        "3.5" => 3.5,
        _ => {
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let step: u32 = value.parse().ok()?;
            if step > 96 {
                return None;
            }
            f64::from(step)
        }
    };

    if step == 0.0 {
        return Some("0px".to_string());
    }
    Some(format!("{}rem", step * 0.25))
}

/// Text, background and border colours from the gray and blue palettes.
fn color(class: &str) -> Option<String> {
    let (property, name) = if let Some(name) = class.strip_prefix("text-") {
        ("color", name)
    } else if let Some(name) = class.strip_prefix("bg-") {
        ("background-color", name)
    } else if let Some(name) = class.strip_prefix("border-") {
        ("border-color", name)
    } else {
        return None;
    };

    Some(format!("{}: {};", property, palette(name)?))
}

fn palette(name: &str) -> Option<&'static str> {
    let hex = match name {
        "white" => "#ffffff",
        "black" => "#000000",
        "gray-50" => "#f9fafb",
        "gray-100" => "#f3f4f6",
        "gray-200" => "#e5e7eb",
        "gray-300" => "#d1d5db",
        "gray-400" => "#9ca3af",
        "gray-500" => "#6b7280",
        "gray-600" => "#4b5563",
        "gray-700" => "#374151",
        "gray-800" => "#1f2937",
        "gray-900" => "#111827",
        "blue-50" => "#eff6ff",
        "blue-100" => "#dbeafe",
        "blue-500" => "#3b82f6",
        "blue-600" => "#2563eb",
        "blue-700" => "#1d4ed8",
        "blue-800" => "#1e40af",
        _ => return None,
    };
    Some(hex)
}

fn font_family(class: &str) -> Option<String> {
    (class == "font-mono").then(|| format!("font-family: {};", MONO_STACK))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_rules() {
        assert_eq!(
            utility_rule("mb-4").as_deref(),
            Some(".mb-4 { margin-bottom: 1rem; }")
        );
        assert_eq!(
            utility_rule("px-4").as_deref(),
            Some(".px-4 { padding-left: 1rem; padding-right: 1rem; }")
        );
        assert_eq!(
            utility_rule("py-0.5").as_deref(),
            Some(".py-0\\.5 { padding-top: 0.125rem; padding-bottom: 0.125rem; }")
        );
        assert_eq!(
            utility_rule("mx-auto").as_deref(),
            Some(".mx-auto { margin-left: auto; margin-right: auto; }")
        );
        assert_eq!(utility_rule("m-0").as_deref(), Some(".m-0 { margin: 0px; }"));
    }

    #[test]
    fn test_spacing_rejects_out_of_scale() {
        assert_eq!(utility_rule("mb-97"), None);
        assert_eq!(utility_rule("mb-x"), None);
        assert_eq!(utility_rule("px-auto"), None);
        assert_eq!(utility_rule("mb-"), None);
    }

    #[test]
    fn test_hover_variant() {
        assert_eq!(
            utility_rule("hover:text-blue-800").as_deref(),
            Some(".hover\\:text-blue-800:hover { color: #1e40af; }")
        );
    }

    #[test]
    fn test_color_rules() {
        assert_eq!(
            utility_rule("bg-gray-100").as_deref(),
            Some(".bg-gray-100 { background-color: #f3f4f6; }")
        );
        assert_eq!(
            utility_rule("border-gray-200").as_deref(),
            Some(".border-gray-200 { border-color: #e5e7eb; }")
        );
        assert_eq!(utility_rule("text-purple-500"), None);
    }

    #[test]
    fn test_font_rules() {
        assert_eq!(
            utility_rule("text-sm").as_deref(),
            Some(".text-sm { font-size: 0.875rem; line-height: 1.25rem; }")
        );
        assert!(
            utility_rule("font-mono")
                .expect("font-mono is a utility")
                .contains("monospace")
        );
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        assert_eq!(utility_rule("class"), None);
        assert_eq!(utility_rule("hover:"), None);
        assert_eq!(utility_rule("hello-world"), None);
    }

    #[test]
    fn test_scan_text_collects_classes() {
        // Arrange
        let mut set = UtilitySet::new();

        // Act
        set.scan_text(r#"<p class="mb-4 leading-7">Not a class: word.</p><a class="hover:text-blue-800">"#);

        // Assert
        assert!(set.contains("mb-4"));
        assert!(set.contains("leading-7"));
        assert!(set.contains("hover:text-blue-800"));
        assert!(!set.contains("class"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_scan_text_trims_sentence_period() {
        // Arrange
        let mut set = UtilitySet::new();

        // Act
        set.scan_text("Add italic.");

        // Assert
        assert!(set.contains("italic"));
    }

    #[test]
    fn test_to_css_orders_variants_last() {
        // Arrange
        let mut set = UtilitySet::new();
        set.scan_text("hover:text-blue-800 text-blue-600 underline");

        // Act
        let css = set.to_css();

        // Assert
        assert!(css.starts_with(PREFLIGHT));
        let base = css.find(".text-blue-600").expect("base rule");
        let hover = css.find(".hover\\:text-blue-800").expect("hover rule");
        assert!(base < hover, "Variants must come after base rules");
        assert!(css.contains(".underline { text-decoration-line: underline; }"));
    }

    #[test]
    fn test_to_css_empty_set_is_preflight() {
        assert_eq!(UtilitySet::new().to_css(), PREFLIGHT);
    }

    #[test]
    fn test_scan_path_skips_hidden_and_binary() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;
        fs::write(dir.path().join("page.html"), "<p class=\"mb-4\"></p>")?;
        fs::create_dir(dir.path().join(".cache"))?;
        fs::write(dir.path().join(".cache/old.html"), "<p class=\"mt-8\"></p>")?;
        fs::write(dir.path().join("image.bin"), [0xff, 0xfe, 0x00])?;

        // Act
        let mut set = UtilitySet::new();
        set.scan_path(dir.path())?;

        // Assert
        assert!(set.contains("mb-4"));
        assert!(!set.contains("mt-8"), "Hidden directories are skipped");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_path_directory_link_loop() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;
        fs::create_dir(dir.path().join("templates"))?;
        fs::write(dir.path().join("templates/card.html"), "<div class=\"p-6\"></div>")?;
        std::os::unix::fs::symlink("..", dir.path().join("templates/up"))?;

        // Act
        let mut set = UtilitySet::new();
        set.scan_path(dir.path())?;

        // Assert
        assert!(set.contains("p-6"));
        assert_eq!(set.len(), 1);
        Ok(())
    }

    #[test]
    fn test_scan_path_single_file() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("layout.html");
        fs::write(&file, "<main class=\"mx-auto\"></main>")?;

        // Act
        let mut set = UtilitySet::new();
        set.scan_path(&file)?;

        // Assert
        assert!(set.contains("mx-auto"));
        Ok(())
    }
}
