//!
//! The benchmark reporter library.
//!

pub mod collector;
pub mod config;
pub mod output;
pub mod record;
pub mod sink;

pub use crate::collector::error::Error as CollectorError;
pub use crate::collector::Collector;
pub use crate::config::error::Error as ConfigError;
pub use crate::config::repository::Repository;
pub use crate::config::Config;
pub use crate::output::section::Section;
pub use crate::output::table::Table;
pub use crate::record::Record;
pub use crate::sink::error::Error as SinkError;
pub use crate::sink::github::comment::PullRequestComment;
pub use crate::sink::github::pull_request::PullRequestBody;
pub use crate::sink::github::Client as GitHubClient;
pub use crate::sink::target::Target;
pub use crate::sink::TextSink;

/// The benchmark result file extension.
pub const EXTENSION_BENCH: &str = "bench";

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
