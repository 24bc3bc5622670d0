//! TOML front matter at the top of a document.

use anyhow::{Context, Result};
use serde::Deserialize;

const DELIMITER: &str = "+++";

/// Page metadata declared before the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Splits `+++`-delimited front matter from the document body.
///
/// Documents without an opening delimiter line, or with an unterminated
/// block, are returned whole with default front matter.
///
/// # Errors
///
/// Returns error if the front matter block is not valid TOML
pub fn split(input: &str) -> Result<(FrontMatter, &str)> {
    let Some(rest) = strip_delimiter_line(input) else {
        return Ok((FrontMatter::default(), input));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let front_matter: FrontMatter =
                toml::from_str(block).context("Failed to parse front matter")?;
            return Ok((front_matter, body));
        }
        offset += line.len();
    }

    Ok((FrontMatter::default(), input))
}

fn strip_delimiter_line(input: &str) -> Option<&str> {
    let rest = input.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}
