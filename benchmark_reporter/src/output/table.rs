//!
//! The markdown comparison table.
//!

use crate::record::Record;

///
/// The markdown comparison table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The rendered markdown.
    pub content: String,
}

impl Table {
    /// The header row.
    pub const HEADER: &'static str = "| Benchmark | Base | PR |";

    /// The header delimiter row.
    pub const DELIMITER: &'static str = "|-----------|------|----|";

    ///
    /// Renders a single result cell.
    ///
    /// Line breaks become `<br>` and the value is wrapped into `<pre>`, so multi-line
    /// results keep their layout without splitting the row.
    ///
    pub fn cell(value: Option<&str>) -> String {
        match value {
            Some(value) => format!(
                "<pre>{}</pre>",
                Self::escape(value)
                    .replace("\r\n", "<br>")
                    .replace('\n', "<br>")
            ),
            None => String::new(),
        }
    }

    ///
    /// Escapes the column separator.
    ///
    fn escape(value: &str) -> String {
        value.replace('|', "&#124;")
    }
}

impl From<&[Record]> for Table {
    fn from(records: &[Record]) -> Self {
        let mut content = String::with_capacity(64 * (records.len() + 2));
        content.push_str(Self::HEADER);
        content.push('\n');
        content.push_str(Self::DELIMITER);
        for record in records.iter() {
            content.push_str(
                format!(
                    "\n| {} | {} | {} |",
                    Self::escape(record.name.as_str()),
                    Self::cell(record.base.as_deref()),
                    Self::cell(record.pr.as_deref()),
                )
                .as_str(),
            );
        }
        Self { content }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
