//!
//! The configuration error.
//!

///
/// The configuration error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("Environment variable `{name}` is not set")]
    MissingVariable {
        /// The variable name.
        name: &'static str,
    },
    /// The repository identifier is not in the `owner/name` form.
    #[error("Repository `{value}` must be in the `owner/name` form")]
    InvalidRepository {
        /// The offending value.
        value: String,
    },
    /// The pull request number is not a positive integer.
    #[error("Pull request number `{value}` is invalid: {error}")]
    InvalidPullRequestNumber {
        /// The underlying parsing error.
        error: std::num::ParseIntError,
        /// The offending value.
        value: String,
    },
}
