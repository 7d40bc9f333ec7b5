//!
//! The benchmark result collector.
//!

pub mod error;


use std::collections::HashMap;
use std::path::Path;

use colored::Colorize;

use crate::record::Record;

use self::error::Error;

///
/// The benchmark result collector.
///
/// Scans the base and PR result directories and merges their files by benchmark name.
///
#[derive(Debug, Default)]
pub struct Collector {
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Collector {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    ///
    /// Collects the records from the base and PR directories.
    ///
    /// Base records come first, in the directory listing order. Benchmarks found only in the
    /// PR directory are appended afterwards.
    ///
    pub fn collect(&self, base_path: &Path, pr_path: &Path) -> Result<Vec<Record>, Error> {
        let mut records: Vec<Record> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (name, value) in self.read_directory(base_path, "base")? {
            positions.insert(name.clone(), records.len());
            records.push(Record::base(name, value));
        }

        for (name, value) in self.read_directory(pr_path, "PR")? {
            match positions.get(name.as_str()) {
                Some(&position) => records[position].pr = Some(value),
                None => {
                    positions.insert(name.clone(), records.len());
                    records.push(Record::pr(name, value));
                }
            }
        }

        Ok(records)
    }

    ///
    /// Reads all result files directly inside the directory.
    ///
    /// Returns the benchmark names paired with the trimmed file contents, sorted by file name.
    ///
    fn read_directory(&self, path: &Path, label: &str) -> Result<Vec<(String, String)>, Error> {
        let metadata = std::fs::metadata(path).map_err(|error| Error::DirectoryAccess {
            error,
            path: path.to_path_buf(),
        })?;
        if !metadata.is_dir() {
            return Err(Error::NotDirectory {
                path: path.to_path_buf(),
            });
        }
        // Unreadable directories are skipped by `glob` instead of failing.
        std::fs::read_dir(path).map_err(|error| Error::DirectoryAccess {
            error,
            path: path.to_path_buf(),
        })?;

        if !self.quiet {
            println!(
                "  {} {} results from {:?}",
                "Collecting".bright_green().bold(),
                label,
                path,
            );
        }

        let resolution_pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&path.to_string_lossy()),
            crate::EXTENSION_BENCH,
        );
        let suffix = format!(".{}", crate::EXTENSION_BENCH);

        let mut results = Vec::new();
        for entry in glob::glob_with(resolution_pattern.as_str(), glob::MatchOptions::new())? {
            let file_path = entry?;
            let metadata = std::fs::metadata(file_path.as_path()).map_err(|error| {
                Error::Reading {
                    error,
                    path: file_path.clone(),
                }
            })?;
            if !metadata.is_file() {
                continue;
            }

            // A bare `.bench` file is the benchmark with an empty name.
            let file_name = match file_path.file_name() {
                Some(file_name) => file_name.to_string_lossy().to_string(),
                None => continue,
            };
            let name = match file_name.strip_suffix(suffix.as_str()) {
                Some(name) => name.to_owned(),
                None => continue,
            };
            let text = std::fs::read_to_string(file_path.as_path()).map_err(|error| {
                Error::Reading {
                    error,
                    path: file_path.clone(),
                }
            })?;

            if !self.quiet {
                println!(
                    "       {} {} benchmark `{}`",
                    "Found".bright_green().bold(),
                    label,
                    name,
                );
            }
            results.push((name, text.trim().to_owned()));
        }
        Ok(results)
    }
}
