//! Crash report extraction.
//!
//! macOS writes crash reports in two formats: modern `.ips` files with a
//! JSON body, and legacy `.crash` files with a free-text header section.
//! Both are reduced to the same [`CrashRecord`] shape; the format is
//! dispatched on the file extension and recorded as a tag.
//!
//! Extraction is best-effort per file: a report that cannot be read or
//! parsed is skipped and the batch continues. No partial records are
//! emitted — a file either yields a complete record or nothing.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde_json::Value;
use tracing::debug;

use crate::discovery;
use crate::error::Result;
use crate::model::{CrashFormat, CrashRecord};
use crate::parser::LogParser;

/// How many lines of a legacy report are kept verbatim as the preview.
const PREVIEW_LINES: usize = 20;

/// How many header lines of a legacy report are scanned for fields.
const HEADER_SCAN_LINES: usize = 30;

/// Parser for crash report files under the DiagnosticReports directories.
#[derive(Debug, Clone)]
pub struct CrashReportParser {
    limit: Option<usize>,
    roots: Vec<PathBuf>,
}

impl CrashReportParser {
    /// Create a parser over the default user and system report directories.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            roots: discovery::default_crash_roots(),
        }
    }

    /// Override the directories searched for reports.
    #[must_use]
    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Extract one record per parseable file.
    ///
    /// `paths` is expected newest-modified-first (discovery order); that
    /// order is preserved and the limit, when non-zero, is applied after
    /// the whole batch is accumulated.
    pub fn parse_files(&self, paths: &[PathBuf]) -> Vec<CrashRecord> {
        let mut records = Vec::new();

        for path in paths {
            // Tolerate files vanishing between discovery and read.
            if !path.exists() {
                continue;
            }
            match parse_crash_file(path) {
                Some(record) => records.push(record),
                None => debug!(path = %path.display(), "skipping unparseable crash report"),
            }
        }

        if let Some(limit) = self.limit {
            if limit > 0 && records.len() > limit {
                records.truncate(limit);
            }
        }

        records
    }
}

impl LogParser for CrashReportParser {
    type Input = Vec<PathBuf>;
    type Record = CrashRecord;

    /// Discover report files, newest-modified first.
    fn fetch(&self) -> Result<Vec<PathBuf>> {
        Ok(discovery::crash_report_files(&self.roots))
    }

    fn parse_input(&mut self, input: &Vec<PathBuf>) -> Vec<CrashRecord> {
        self.parse_files(input)
    }
}

/// Dispatch a single report file on its extension.
fn parse_crash_file(path: &Path) -> Option<CrashRecord> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ips") => parse_ips_file(path),
        Some("crash") => parse_crash_text_file(path),
        _ => None,
    }
}

/// Extract a record from a structured (JSON) report.
///
/// The whole file must parse as one JSON document; anything else skips the
/// file. Exception fields come from the first element of
/// `exception.values` when an `exception` object is present.
fn parse_ips_file(path: &Path) -> Option<CrashRecord> {
    let content = fs::read_to_string(path).ok()?;
    let data: Value = serde_json::from_str(&content).ok()?;

    let (exception_type, exception_message) = match data.get("exception") {
        Some(exc) if truthy(exc) => {
            let exc = exc.as_object()?;
            match exc.get("values") {
                None => (None, None),
                Some(Value::Array(values)) => {
                    // An exception block with an empty or malformed values
                    // list skips the whole file.
                    let first = values.first()?.as_object()?;
                    (
                        first.get("type").and_then(Value::as_str).map(String::from),
                        first.get("value").and_then(Value::as_str).map(String::from),
                    )
                }
                Some(_) => return None,
            }
        }
        _ => (None, None),
    };

    let metadata = fs::metadata(path).ok()?;

    Some(CrashRecord {
        file_path: path.display().to_string(),
        file_name: file_name_of(path),
        format: CrashFormat::Ips,
        timestamp: data.get("timestamp").and_then(Value::as_str).map(String::from),
        incident_id: data.get("incidentID").and_then(Value::as_str).map(String::from),
        process: data.get("process").and_then(Value::as_str).map(String::from),
        exception_type,
        exception_message,
        crash_location: parent_name_of(path),
        file_size: metadata.len(),
        modified_time: mtime_epoch(&metadata)?,
        preview: None,
    })
}

/// Extract a record from a legacy free-text report.
///
/// The first [`PREVIEW_LINES`] lines are kept verbatim; the first
/// [`HEADER_SCAN_LINES`] are scanned for `Process:` and `Date/Time:`
/// markers. A missing marker leaves its field empty — that is not an
/// error. Invalid byte sequences in the file are dropped.
fn parse_crash_text_file(path: &Path) -> Option<CrashRecord> {
    let bytes = fs::read(path).ok()?;
    let content = decode_dropping_invalid(&bytes);

    let preview: String = content.split_inclusive('\n').take(PREVIEW_LINES).collect();

    let mut process = None;
    let mut timestamp = None;
    for line in content.lines().take(HEADER_SCAN_LINES) {
        if let Some((_, after)) = line.split_once("Process:") {
            // The marker with no token after it aborts the file.
            process = Some(after.split_whitespace().next()?.to_string());
        }
        if let Some((_, after)) = line.split_once("Date/Time:") {
            timestamp = Some(after.trim().to_string());
        }
    }

    let metadata = fs::metadata(path).ok()?;

    Some(CrashRecord {
        file_path: path.display().to_string(),
        file_name: file_name_of(path),
        format: CrashFormat::Crash,
        timestamp,
        incident_id: None,
        process,
        exception_type: None,
        exception_message: None,
        crash_location: parent_name_of(path),
        file_size: metadata.len(),
        modified_time: mtime_epoch(&metadata)?,
        preview: Some(preview),
    })
}

/// JSON truthiness: null, false, 0, "", [] and {} all count as absent.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences entirely.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip..];
                if rest.is_empty() {
                    break;
                }
            }
        }
    }
    out
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_name_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn mtime_epoch(metadata: &fs::Metadata) -> Option<f64> {
    let modified = metadata.modified().ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(since_epoch.as_secs_f64())
}
