//! End-to-end tests over real files in temporary directories.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use logsift::discovery;
use logsift::model::{CrashFormat, LogSource};
use logsift::parser::{
    parse_syslog_line, CrashReportParser, LogParser, PackageLogParser, UnifiedLogParser,
};

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

// Unified log

const UNIFIED_BLOB: &str = "\
Timestamp                       (process)[PID]
2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached
2024-01-15 10:30:45-0800  MyMac  kernel[0] boot complete
2024-01-15 10:30:46.000000-0800  MyMac  loginwindow[88]: <Error>: auth: failed for user
short line
2024-01-15 10:30:47.000000-0800  MyMac  launchd[1]: job spawned
";

#[test]
fn unified_canonical_line_fields() {
    let record = parse_syslog_line(
        "2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached",
        "system",
    )
    .unwrap();

    assert_eq!(record.timestamp, "2024-01-15 10:30:45.123456-0800");
    assert_eq!(record.hostname, "MyMac");
    assert_eq!(record.process, "kernel");
    assert_eq!(record.pid, "0");
    assert_eq!(record.level, "Notice");
    assert_eq!(record.message, "USB device attached");
}

#[test]
fn unified_no_colon_example() {
    let record = parse_syslog_line(
        "2024-01-15 10:30:45-0800  MyMac  kernel[0] boot complete",
        "system",
    )
    .unwrap();

    assert_eq!(record.level, "Unknown");
    assert_eq!(record.message, "boot complete");
}

#[test]
fn unified_blob_preserves_line_order_and_raw() {
    let mut parser = UnifiedLogParser::for_source(LogSource::System);
    let records = parser.parse_text(UNIFIED_BLOB);

    assert_eq!(records.len(), 4);
    let processes: Vec<_> = records.iter().map(|r| r.process.as_str()).collect();
    assert_eq!(processes, ["kernel", "kernel", "loginwindow", "launchd"]);

    for record in &records {
        assert!(UNIFIED_BLOB.contains(record.raw.as_str()));
        assert!(!record.timestamp.is_empty());
    }
}

#[test]
fn unified_limit_is_a_prefix_of_unlimited() {
    let mut unlimited = UnifiedLogParser::new("", "system");
    let all = unlimited.parse_text(UNIFIED_BLOB);

    for n in 0..=all.len() + 1 {
        let mut limited = UnifiedLogParser::new("", "system").with_limit(Some(n));
        let some = limited.parse_text(UNIFIED_BLOB);
        if n == 0 {
            assert_eq!(some, all);
        } else {
            assert!(some.len() <= n);
            assert_eq!(some[..], all[..some.len()]);
        }
    }
}

// Crash reports

#[test]
fn crash_reports_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "safari.ips",
        br#"{"timestamp": "2024-01-15 10:30:45.00 -0800", "incidentID": "0B7A-11", "process": "Safari",
            "exception": {"values": [{"type": "EXC_BAD_ACCESS", "value": "x"}]}}"#,
    );
    write_file(&dir, "mail.ips", br#"{"process": "Mail"}"#);
    write_file(&dir, "broken.ips", b"{truncated");
    write_file(
        &dir,
        "finder.crash",
        b"Process:               Finder [321]\nDate/Time:             2024-01-14 09:00:00\n",
    );
    write_file(&dir, "readme.txt", b"not a report");

    let roots = vec![dir.path().to_path_buf()];
    let files = discovery::crash_report_files(&roots);
    assert_eq!(files.len(), 4); // broken.ips is still discovered

    let parser = CrashReportParser::new(None);
    let records = parser.parse_files(&files);

    // broken.ips is skipped at parse time, never erroring the batch.
    assert_eq!(records.len(), 3);

    let safari = records
        .iter()
        .find(|r| r.file_name == "safari.ips")
        .unwrap();
    assert_eq!(safari.format, CrashFormat::Ips);
    assert_eq!(safari.exception_type.as_deref(), Some("EXC_BAD_ACCESS"));
    assert_eq!(safari.exception_message.as_deref(), Some("x"));
    assert_eq!(safari.incident_id.as_deref(), Some("0B7A-11"));

    let mail = records.iter().find(|r| r.file_name == "mail.ips").unwrap();
    assert_eq!(mail.exception_type, None);
    assert_eq!(mail.exception_message, None);

    let finder = records
        .iter()
        .find(|r| r.file_name == "finder.crash")
        .unwrap();
    assert_eq!(finder.format, CrashFormat::Crash);
    assert_eq!(finder.process.as_deref(), Some("Finder"));
    assert_eq!(finder.timestamp.as_deref(), Some("2024-01-14 09:00:00"));
    assert!(finder.preview.is_some());
}

#[test]
fn crash_limit_preserves_discovery_order() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.ips", br#"{"process": "A"}"#);
    let b = write_file(&dir, "b.ips", br#"{"process": "B"}"#);
    let c = write_file(&dir, "c.ips", br#"{"process": "C"}"#);

    let parser = CrashReportParser::new(Some(2));
    let records = parser.parse_files(&[a, b, c]);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].process.as_deref(), Some("A"));
    assert_eq!(records[1].process.as_deref(), Some("B"));
}

// Package logs

#[test]
fn package_logs_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "brew.log",
        b"2024-01-01 10:00:00: upgraded openssl\n2024-01-02 10:00:00: installed wget\nplain note\n",
    );

    let roots = vec![dir.path().to_path_buf()];
    let files = discovery::package_log_files(&roots);

    let parser = PackageLogParser::new(None);
    let records = parser.parse_files(&files);

    // brew.log is listed by well-known name and again by glob, so every
    // line appears twice.
    assert_eq!(records.len(), 6);

    // Timestamped entries first (descending), no-timestamp entries last.
    assert!(records[0]
        .timestamp
        .as_deref()
        .unwrap()
        .starts_with("2024-01-02"));
    assert_eq!(records[4].timestamp, None);
    assert_eq!(records[4].message, "plain note");

    // Line numbers are 1-based within the file.
    assert_eq!(records[0].line_number, 2);
}

#[test]
fn package_missing_root_yields_empty() {
    let roots = vec![PathBuf::from("/nonexistent/homebrew/var/log")];
    assert!(discovery::package_log_files(&roots).is_empty());

    let mut parser = PackageLogParser::new(None).with_roots(roots);
    assert!(parser.parse().unwrap().is_empty());
}

#[test]
fn package_unreadable_file_does_not_abort_batch() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.log", b"2024-01-01 00:00:00: ok\n");
    let gone = dir.path().join("gone.log");

    let parser = PackageLogParser::new(None);
    let records = parser.parse_files(&[gone, good]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "ok");
}
