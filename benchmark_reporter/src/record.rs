//!
//! The benchmark record.
//!

///
/// A single benchmark with its base and PR results.
///
/// `None` means that the respective directory has no result file for the benchmark,
/// which is different from a file with empty content.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The benchmark name, that is, the result file name without extension.
    pub name: String,
    /// The base branch result.
    pub base: Option<String>,
    /// The PR branch result.
    pub pr: Option<String>,
}

impl Record {
    ///
    /// Creates a record found in the base directory.
    ///
    pub fn base(name: String, value: String) -> Self {
        Self {
            name,
            base: Some(value),
            pr: None,
        }
    }

    ///
    /// Creates a record found in the PR directory only.
    ///
    pub fn pr(name: String, value: String) -> Self {
        Self {
            name,
            base: None,
            pr: Some(value),
        }
    }
}
