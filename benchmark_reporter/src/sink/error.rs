//!
//! The text sink error.
//!

///
/// The text sink error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or its response could not be read.
    #[error("GitHub API request: {0}")]
    Request(#[from] reqwest::Error),
    /// The API responded with a client or server error.
    #[error("GitHub API `{method} {url}` responded with {status}: {message}")]
    Status {
        /// The request method.
        method: reqwest::Method,
        /// The request URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
        /// The response body.
        message: String,
    },
    /// There is no existing text to update.
    #[error("No comments found on pull request #{pr_number}")]
    MissingTarget {
        /// The pull request number.
        pr_number: u64,
    },
}
