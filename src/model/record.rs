//! Unified-log record shape.

use serde::{Deserialize, Serialize};

/// A single parsed unified-log line.
///
/// All fields are source-native strings. `raw` always holds the original
/// input line verbatim, so callers can recover anything the field split
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Timestamp exactly as it appeared in the line.
    pub timestamp: String,
    /// Host that emitted the line.
    pub hostname: String,
    /// Emitting process name.
    pub process: String,
    /// Process ID, as text (the bracket contents are not validated).
    pub pid: String,
    /// Severity level, or `"Unknown"` when the line carried none.
    pub level: String,
    /// Message body with the routing prefix stripped.
    pub message: String,
    /// Caller-supplied source tag (e.g. `"system"`, `"kernel"`).
    pub log_type: String,
    /// The original line, unmodified.
    pub raw: String,
}
