//! Syslog-style line parsing.
//!
//! A unified-log line in syslog style looks like:
//!
//! ```text
//! 2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached
//! ```
//!
//! i.e. `TIMESTAMP<double space>HOSTNAME<space>PROCESS[PID]: [<LEVEL>:] MESSAGE`.
//! [`parse_syslog_line`] splits one such line into a [`LogRecord`] by
//! positional scanning. It is a pure function: no I/O, no allocation beyond
//! the record itself, and any structural mismatch yields `None` rather than
//! a partial record.

use crate::model::LogRecord;

/// Minimum plausible length of a log line: `YYYY-MM-DD HH:MM:SS` is 19
/// characters, and every real line carries at least that much timestamp.
const MIN_LINE_LEN: usize = 19;

/// How far into the message a `<Level>` marker may start and still count as
/// a level rather than message content.
const LEVEL_SCAN_WINDOW: usize = 20;

/// Cheap shape check: does this line plausibly start with a timestamp?
///
/// Header and ruler lines emitted by `log show` fail this check, as does any
/// line too short to hold a date. The check is counted in characters, not
/// bytes.
#[must_use]
pub fn looks_like_log_line(line: &str) -> bool {
    let mut chars = line.chars();
    let mut count = 0usize;
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_digit() => count += 1,
            _ => return false,
        }
    }
    // First four are digits; now require the full minimum length.
    count + chars.count() >= MIN_LINE_LEN
}

/// Parse one syslog-style line into a [`LogRecord`] tagged with `log_type`.
///
/// Returns `None` for anything that does not match the shape: missing
/// double-space timestamp separator, missing hostname separator, missing
/// PID brackets, or the literal `Timestamp` column header. The returned
/// record's `raw` field is always the input line, byte for byte.
#[must_use]
pub fn parse_syslog_line(line: &str, log_type: &str) -> Option<LogRecord> {
    if !looks_like_log_line(line) {
        return None;
    }

    // Timestamp ends at the first run of two spaces.
    let (timestamp, rest) = line.split_once("  ")?;
    let timestamp = timestamp.trim();
    let rest = rest.trim();

    // Hostname ends at the first single space.
    let (hostname, remainder) = rest.split_once(' ')?;
    let hostname = hostname.trim();
    let remainder = remainder.trim();

    if timestamp.is_empty() || timestamp == "Timestamp" || !digit_prefix(timestamp) {
        return None;
    }

    // PID sits in the bracket pair ending at the first `]`; the matching
    // `[` is the last one before it, so process names containing `[` keep
    // their inner brackets.
    let pid_end = remainder.find(']')?;
    let pid_start = remainder[..pid_end].rfind('[')?;
    let process = remainder[..pid_start].trim();
    let pid = &remainder[pid_start + 1..pid_end];

    let (level, message) = match find_from(remainder, ':', pid_end) {
        None => {
            // No colon after the PID bracket: everything after it is the
            // message and the line carries no level.
            ("Unknown".to_string(), remainder[pid_end + 1..].trim().to_string())
        }
        Some(colon) => {
            let message = remainder[colon + 1..].trim();
            extract_level(message)
        }
    };

    Some(LogRecord {
        timestamp: timestamp.to_string(),
        hostname: hostname.to_string(),
        process: process.to_string(),
        pid: pid.to_string(),
        level,
        message,
        log_type: log_type.to_string(),
        raw: line.to_string(),
    })
}

/// Pull a `<Level>` marker off the front of a message, if one is there.
///
/// The `<` must fall within the first [`LEVEL_SCAN_WINDOW`] characters and
/// have a matching `>` after it; otherwise the level is `"Unknown"` and the
/// message is returned untouched. When a level is extracted the message is
/// rewound past the `>`, with a single leading `:` stripped.
fn extract_level(message: &str) -> (String, String) {
    let unknown = || ("Unknown".to_string(), message.to_string());

    let Some(lt) = message.find('<') else {
        return unknown();
    };
    if message[..lt].chars().count() >= LEVEL_SCAN_WINDOW {
        return unknown();
    }
    let Some(gt) = find_from(message, '>', lt) else {
        return unknown();
    };

    let level = message[lt + 1..gt].to_string();
    let mut rest = message[gt + 1..].trim();
    if let Some(stripped) = rest.strip_prefix(':') {
        rest = stripped.trim();
    }
    (level, rest.to_string())
}

/// `str::find` starting at byte offset `from`.
fn find_from(haystack: &str, needle: char, from: usize) -> Option<usize> {
    haystack[from..].find(needle).map(|i| i + from)
}

/// Up to the first four characters are all decimal digits (and at least one
/// exists).
fn digit_prefix(s: &str) -> bool {
    let mut seen = false;
    for c in s.chars().take(4) {
        if !c.is_ascii_digit() {
            return false;
        }
        seen = true;
    }
    seen
}
