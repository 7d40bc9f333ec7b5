//!
//! The benchmark reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark reporter arguments.
///
/// The GitHub token, repository, and pull request number are read from the
/// `GITHUB_TOKEN`, `GITHUB_REPOSITORY`, and `PR_NUMBER` environment variables.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory with the base branch `*.bench` result files.
    pub base_path: PathBuf,

    /// Directory with the pull request branch `*.bench` result files.
    pub pr_path: PathBuf,

    /// Text to update: `body` (pull request description) or `comment` (its first comment).
    #[arg(long, default_value_t = benchmark_reporter::Target::Body)]
    pub target: benchmark_reporter::Target,

    /// Prints the updated text instead of writing it to the pull request.
    #[arg(long)]
    pub dry_run: bool,
}

impl Arguments {
    ///
    /// Whether the status output is suppressed.
    ///
    /// The dry run prints the updated text to `stdout`, so it is always quiet.
    ///
    pub fn is_quiet(&self) -> bool {
        self.quiet || self.dry_run
    }
}
