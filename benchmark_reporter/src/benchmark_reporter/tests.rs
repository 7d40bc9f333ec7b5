//!
//! Tests for the benchmark reporter arguments.
//!

#![cfg(test)]

use clap::Parser;

use crate::arguments::Arguments;

#[test]
fn positional_paths() {
    let arguments =
        Arguments::try_parse_from(["benchmark-reporter", "base", "pr"]).expect("Always valid");

    assert_eq!(arguments.base_path, std::path::PathBuf::from("base"));
    assert_eq!(arguments.pr_path, std::path::PathBuf::from("pr"));
    assert_eq!(arguments.target, benchmark_reporter::Target::Body);
    assert!(!arguments.is_quiet());
}

#[test]
fn dry_run_is_quiet() {
    let arguments = Arguments::try_parse_from(["benchmark-reporter", "--dry-run", "base", "pr"])
        .expect("Always valid");

    assert!(arguments.is_quiet());
}

#[test]
fn wrong_argument_count() {
    assert!(Arguments::try_parse_from(["benchmark-reporter", "base"]).is_err());
    assert!(Arguments::try_parse_from(["benchmark-reporter", "base", "pr", "extra"]).is_err());
}
