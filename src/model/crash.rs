//! Crash-report record shape.

use serde::{Deserialize, Serialize};

/// On-disk format of a crash report, selected by file extension at dispatch
/// time. Callers pattern-match on this tag rather than on the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrashFormat {
    /// Modern structured report (JSON body).
    Ips,
    /// Legacy free-text report with a fixed-order header.
    Crash,
}

impl CrashFormat {
    /// The file extension this format is dispatched on.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ips => "ips",
            Self::Crash => "crash",
        }
    }
}

/// A single extracted crash report.
///
/// Field presence varies by format: `incident_id` only appears in structured
/// reports, `preview` only in legacy ones. Header fields the extractor could
/// not locate stay `None` — a sparse record is still a valid record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    /// Absolute path of the report file.
    pub file_path: String,
    /// File name component of the path.
    pub file_name: String,
    /// Report format tag.
    pub format: CrashFormat,
    /// Crash timestamp in source-native form, if present.
    pub timestamp: Option<String>,
    /// Incident identifier (structured reports only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<String>,
    /// Name of the crashed process, if present.
    pub process: Option<String>,
    /// Exception type from the first exception value, if any.
    pub exception_type: Option<String>,
    /// Exception message from the first exception value, if any.
    pub exception_message: Option<String>,
    /// Name of the directory the report was found in.
    pub crash_location: String,
    /// Report file size in bytes.
    pub file_size: u64,
    /// File modification time as epoch seconds.
    pub modified_time: f64,
    /// First 20 lines of the report, verbatim (legacy reports only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extension() {
        assert_eq!(CrashFormat::Ips.extension(), "ips");
        assert_eq!(CrashFormat::Crash.extension(), "crash");
    }

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(serde_json::to_value(CrashFormat::Ips).unwrap(), "ips");
        assert_eq!(serde_json::to_value(CrashFormat::Crash).unwrap(), "crash");
    }

    #[test]
    fn test_absent_fields_skipped() {
        let record = CrashRecord {
            file_path: "/tmp/test.ips".to_string(),
            file_name: "test.ips".to_string(),
            format: CrashFormat::Ips,
            timestamp: None,
            incident_id: None,
            process: None,
            exception_type: None,
            exception_message: None,
            crash_location: "tmp".to_string(),
            file_size: 42,
            modified_time: 1_700_000_000.0,
            preview: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("incident_id").is_none());
        assert!(json.get("preview").is_none());
        // A missing timestamp still serializes, as null.
        assert!(json["timestamp"].is_null());
    }
}
