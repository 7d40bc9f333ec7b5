//!
//! The benchmark section of a pull request text.
//!

use regex::Regex;

use crate::output::table::Table;

///
/// The benchmark section of a pull request text.
///
/// The section is delimited by HTML comment markers, which are invisible in the rendered
/// markdown and let the next run find and replace its previous output.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The rendered section, markers included.
    pub content: String,
}

impl Section {
    /// The section start marker.
    pub const START_MARKER: &'static str = "<!-- BENCHMARK_RESULTS_START -->";

    /// The section end marker.
    pub const END_MARKER: &'static str = "<!-- BENCHMARK_RESULTS_END -->";

    /// The section heading.
    pub const TITLE: &'static str = "## Benchmark Results";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(table: &Table) -> Self {
        let content = format!(
            "{}\n{}\n{}\n{}",
            Self::START_MARKER,
            Self::TITLE,
            table,
            Self::END_MARKER,
        );
        Self { content }
    }

    ///
    /// Returns `existing` with the section inserted exactly once.
    ///
    /// The first span between the start and end markers is replaced. If there is none, the
    /// section is appended after a blank line.
    ///
    pub fn merge_into(&self, existing: &str) -> String {
        let pattern = Regex::new(
            format!(
                "(?s){}.*{}",
                regex::escape(Self::START_MARKER),
                regex::escape(Self::END_MARKER),
            )
            .as_str(),
        )
        .expect("Always valid");

        if pattern.is_match(existing) {
            return pattern
                .replace(existing, regex::NoExpand(self.content.as_str()))
                .into_owned();
        }

        if existing.trim().is_empty() {
            return self.content.clone();
        }
        format!("{existing}\n\n{}", self.content)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
