//! Package-manager log parsing.
//!
//! Homebrew log files carry no single line format, so splitting a line into
//! timestamp and message is a heuristic: a prefix before the first `:`
//! longer than ten characters is taken as a timestamp, provided the line
//! has at least one more `:` after it. False positives and negatives are
//! expected and accepted; downstream consumers depend on the exact
//! behavior, so it is preserved as-is rather than tightened.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::debug;

use crate::discovery;
use crate::error::Result;
use crate::model::PackageRecord;
use crate::parser::LogParser;

/// Minimum length of a prefix-before-colon for it to read as a timestamp.
const TIMESTAMP_PREFIX_MIN: usize = 10;

/// Parser for package-manager log files.
#[derive(Debug, Clone)]
pub struct PackageLogParser {
    limit: Option<usize>,
    roots: Vec<PathBuf>,
}

impl PackageLogParser {
    /// Create a parser over the default Homebrew log directories.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            roots: discovery::default_package_roots(),
        }
    }

    /// Override the directories searched for log files.
    #[must_use]
    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Parse every readable file and merge the results.
    ///
    /// Records are globally ordered by (timestamp descending, file mtime
    /// descending), with a missing timestamp sorting as the empty string —
    /// i.e. last. The limit, when non-zero, applies after the sort.
    pub fn parse_files(&self, files: &[PathBuf]) -> Vec<PackageRecord> {
        let mut records = Vec::new();

        for file in files {
            records.extend(parse_log_file(file));
        }

        records.sort_by(|a, b| {
            let (ts_a, mtime_a) = a.sort_key();
            let (ts_b, mtime_b) = b.sort_key();
            ts_b.cmp(ts_a).then_with(|| {
                mtime_b.partial_cmp(&mtime_a).unwrap_or(Ordering::Equal)
            })
        });

        if let Some(limit) = self.limit {
            if limit > 0 && records.len() > limit {
                records.truncate(limit);
            }
        }

        records
    }
}

impl LogParser for PackageLogParser {
    type Input = Vec<PathBuf>;
    type Record = PackageRecord;

    /// Discover package log files in the first existing root.
    fn fetch(&self) -> Result<Vec<PathBuf>> {
        Ok(discovery::package_log_files(&self.roots))
    }

    fn parse_input(&mut self, input: &Vec<PathBuf>) -> Vec<PackageRecord> {
        self.parse_files(input)
    }
}

/// Read one log file into records, line by line.
///
/// An unreadable file yields no records; it never aborts the batch.
fn parse_log_file(path: &Path) -> Vec<PackageRecord> {
    let Ok(bytes) = fs::read(path) else {
        debug!(path = %path.display(), "skipping unreadable package log");
        return Vec::new();
    };
    let Some(mtime) = file_mtime(path) else {
        return Vec::new();
    };

    let content = String::from_utf8_lossy(&bytes);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_path = path.display().to_string();

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (timestamp, message) = split_timestamp(line);

        records.push(PackageRecord {
            timestamp: timestamp.map(String::from),
            message: message.to_string(),
            file_name: file_name.clone(),
            file_path: file_path.clone(),
            line_number: index + 1,
            file_mtime: mtime,
            log_type: "package".to_string(),
        });
    }

    records
}

/// The heuristic timestamp split, exactly as shipped.
///
/// Requires a prefix before the first `:` longer than
/// [`TIMESTAMP_PREFIX_MIN`] characters AND a second `:` somewhere after it;
/// a line with a single colon never splits, no matter how long its prefix.
fn split_timestamp(line: &str) -> (Option<&str>, &str) {
    if let Some((head, tail)) = line.split_once(':') {
        if head.chars().count() > TIMESTAMP_PREFIX_MIN && tail.contains(':') {
            return (Some(head.trim()), tail.trim());
        }
    }
    (None, line)
}

fn file_mtime(path: &Path) -> Option<f64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(modified.duration_since(UNIX_EPOCH).ok()?.as_secs_f64())
}
