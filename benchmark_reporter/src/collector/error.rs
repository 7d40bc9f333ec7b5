//!
//! The benchmark result collection error.
//!

use std::path::PathBuf;

///
/// The benchmark result collection error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The results directory cannot be accessed.
    #[error("Accessing results directory {path:?}: {error}")]
    DirectoryAccess {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the directory.
        path: PathBuf,
    },
    /// The results path is not a directory.
    #[error("Expected a directory with result files, but got {path:?}")]
    NotDirectory {
        /// The offending path.
        path: PathBuf,
    },
    /// Error reading a result file.
    #[error("Reading result file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the result file.
        path: PathBuf,
    },
    /// The directory listing pattern is invalid.
    #[error("Result files pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A directory entry cannot be listed.
    #[error("Listing result files: {0}")]
    Globbing(#[from] glob::GlobError),
}
