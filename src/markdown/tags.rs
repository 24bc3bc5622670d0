//! Component tags written as raw HTML inside documents.
//!
//! Markdown has no syntax for collapsible sections, subscripts or
//! superscripts, so authors write `<details>`, `<sub>` and friends as raw
//! HTML. This module splits raw HTML into tag and text tokens so the
//! compiler can route the known tags through the component map. Any other
//! markup is reported as [`Token::Unsupported`] and never reaches output.

use regex::Regex;
use std::sync::LazyLock;

use crate::element::ElementKind;
use crate::node::Attributes;
use crate::util::html_decode;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>\x22']|\x22[^\x22]*\x22|'[^']*')*?)(/?)>")
        .expect("tag pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute pattern is valid")
});

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern is valid"));

static RAW_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)\b[^>]*>.*?</(?:script|style)\s*>")
        .expect("raw text pattern is valid")
});

/// Piece of raw HTML.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Open(ElementKind, Attributes),
    Close(ElementKind),
    /// Void or self-closing component tag such as `<br>`.
    Empty(ElementKind, Attributes),
    Text(String),
    Unsupported(String),
}

/// Splits raw HTML into tokens.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let raw = COMMENT.replace_all(raw, "");
    let raw = RAW_TEXT.replace_all(&raw, "");
    let mut tokens = Vec::new();
    let mut pos = 0;

    for caps in TAG.captures_iter(&raw) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > pos {
            push_text(&mut tokens, &raw[pos..whole.start()]);
        }
        pos = whole.end();

        let closing = !caps[1].is_empty();
        let self_closing = !caps[4].is_empty();
        let kind = ElementKind::from_tag(&caps[2]).filter(|kind| kind.is_component_tag());

        let token = match kind {
            None => Token::Unsupported(whole.as_str().to_string()),
            Some(kind) if closing => Token::Close(kind),
            Some(kind) if self_closing || kind.is_void() => {
                Token::Empty(kind, parse_attributes(&caps[3]))
            }
            Some(kind) => Token::Open(kind, parse_attributes(&caps[3])),
        };
        tokens.push(token);
    }

    if pos < raw.len() {
        push_text(&mut tokens, &raw[pos..]);
    }

    tokens
}

fn push_text(tokens: &mut Vec<Token>, text: &str) {
    if text.contains('<') {
        // Stray angle bracket that did not form a tag; treat as markup.
        tokens.push(Token::Unsupported(text.to_string()));
    } else {
        tokens.push(Token::Text(html_decode(text)));
    }
}

/// Parses attributes of an opening tag.
///
/// Event handler attributes (`on*`) are dropped. Bare attributes such as
/// `open` get an empty value.
fn parse_attributes(source: &str) -> Attributes {
    let mut attrs = Attributes::new();

    for caps in ATTRIBUTE.captures_iter(source) {
        let name = caps[1].to_ascii_lowercase();
        if name.starts_with("on") {
            continue;
        }
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| html_decode(m.as_str()))
            .unwrap_or_default();
        attrs.set(name, value);
    }

    attrs
}
