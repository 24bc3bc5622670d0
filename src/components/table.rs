//! Table elements and the structured-data table shorthand

use serde::Deserialize;

use super::styled;
use crate::node::{Attributes, Node};

pub const TABLE_CLASS: &str = "my-4 w-full border-collapse text-left text-sm";
pub const HEAD_CLASS: &str = "bg-gray-50";
pub const BODY_CLASS: &str = "bg-white";
pub const ROW_CLASS: &str = "border-b border-gray-200";
pub const HEADER_CELL_CLASS: &str = "px-4 py-2 font-semibold text-gray-900";
pub const CELL_CLASS: &str = "px-4 py-2 text-gray-700";

/// Cell attribute carrying the column alignment (`center` or `right`). It is
/// turned into an alignment class and not rendered.
pub const ALIGN_ATTR: &str = "align";

pub fn table(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("table", TABLE_CLASS, attrs, children)
}

pub fn table_head(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("thead", HEAD_CLASS, attrs, children)
}

pub fn table_body(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("tbody", BODY_CLASS, attrs, children)
}

pub fn table_row(attrs: Attributes, children: Vec<Node>) -> Node {
    styled("tr", ROW_CLASS, attrs, children)
}

pub fn header_cell(attrs: Attributes, children: Vec<Node>) -> Node {
    aligned("th", HEADER_CELL_CLASS, attrs, children)
}

pub fn cell(attrs: Attributes, children: Vec<Node>) -> Node {
    aligned("td", CELL_CLASS, attrs, children)
}

fn aligned(tag: &'static str, class: &str, mut attrs: Attributes, children: Vec<Node>) -> Node {
    let class = match attrs.remove(ALIGN_ATTR).as_deref() {
        Some("center") => format!("{} text-center", class),
        Some("right") => format!("{} text-right", class),
        _ => class.to_string(),
    };
    styled(tag, &class, attrs, children)
}

/// Table given as plain data instead of markup.
///
/// Deserializes from `{"headers": [...], "rows": [[...], ...]}`. Rows may be
/// shorter or longer than the header row; cells are emitted as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Expands the data into a styled table element tree.
    ///
    /// Produces one header row of `th` cells inside `thead`, followed by one
    /// `tr` of `td` cells per data row inside `tbody`. An empty header list
    /// omits `thead`.
    pub fn expand(&self) -> Node {
        let mut sections = Vec::with_capacity(2);

        if !self.headers.is_empty() {
            let cells = self
                .headers
                .iter()
                .map(|h| header_cell(Attributes::new(), vec![Node::text(h.as_str())]))
                .collect();
            let row = table_row(Attributes::new(), cells);
            sections.push(table_head(Attributes::new(), vec![row]));
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|c| cell(Attributes::new(), vec![Node::text(c.as_str())]))
                    .collect();
                table_row(Attributes::new(), cells)
            })
            .collect();
        sections.push(table_body(Attributes::new(), rows));

        table(Attributes::new(), sections)
    }
}
