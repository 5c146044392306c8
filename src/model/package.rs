//! Package-log record shape.

use serde::{Deserialize, Serialize};

/// A single line extracted from a package-manager log file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Heuristically detected timestamp prefix, if the line had one.
    pub timestamp: Option<String>,
    /// Message body (the whole trimmed line when no timestamp was split off).
    pub message: String,
    /// File name the line came from.
    pub file_name: String,
    /// Absolute path of the log file.
    pub file_path: String,
    /// 1-based line number within the file.
    pub line_number: usize,
    /// Log file modification time as epoch seconds.
    pub file_mtime: f64,
    /// Always `"package"`.
    pub log_type: String,
}

impl PackageRecord {
    /// Sort key for cross-file ordering: timestamp descending with missing
    /// timestamps treated as the empty string, file mtime as tie-break.
    #[must_use]
    pub fn sort_key(&self) -> (&str, f64) {
        (self.timestamp.as_deref().unwrap_or(""), self.file_mtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: Option<&str>, mtime: f64) -> PackageRecord {
        PackageRecord {
            timestamp: timestamp.map(String::from),
            message: "installed foo".to_string(),
            file_name: "brew.log".to_string(),
            file_path: "/opt/homebrew/var/log/brew.log".to_string(),
            line_number: 1,
            file_mtime: mtime,
            log_type: "package".to_string(),
        }
    }

    #[test]
    fn test_sort_key_missing_timestamp_is_empty() {
        let rec = record(None, 5.0);
        assert_eq!(rec.sort_key(), ("", 5.0));
    }

    #[test]
    fn test_sort_key_carries_timestamp() {
        let rec = record(Some("2024-01-02"), 5.0);
        assert_eq!(rec.sort_key(), ("2024-01-02", 5.0));
    }
}
