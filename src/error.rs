//! Error types for logsift.
//!
//! This module provides error handling following the thiserror pattern.
//! Per-record parse failures are never errors: malformed lines are dropped
//! and malformed files are skipped inside the parsers. `SiftError` is
//! reserved for terminal, whole-request failures — the retrieval layer
//! (timeout, missing tool, non-zero exit), platform incompatibility, and
//! plumbing (I/O, serialization, configuration).

use thiserror::Error;

/// Primary error type for logsift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// The `log show` invocation exceeded its deadline.
    #[error("log command timed out after {seconds} seconds")]
    RetrievalTimeout {
        /// Deadline that was exceeded, in seconds.
        seconds: u64,
    },

    /// The `log` executable could not be spawned.
    #[error("Unified Logging System not available. Requires macOS 10.12+")]
    LogToolNotFound,

    /// The `log` command ran but exited with a failure status.
    #[error("log command failed with code {code}: {stderr}")]
    RetrievalFailed {
        /// Exit code reported by the process, or -1 if terminated by signal.
        code: i32,
        /// Captured standard error output.
        stderr: String,
    },

    /// The host platform cannot serve live unified-log queries.
    #[error("Incompatible platform: {message}")]
    Incompatible {
        /// Human-readable explanation of the incompatibility.
        message: String,
    },

    /// Configuration file is present but invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },
}

impl SiftError {
    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new retrieval failure from a process exit.
    #[must_use]
    pub fn retrieval(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::RetrievalFailed {
            code: code.unwrap_or(-1),
            stderr: stderr.into(),
        }
    }

    /// Create a new incompatibility error.
    #[must_use]
    pub fn incompatible(message: impl Into<String>) -> Self {
        Self::Incompatible {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RetrievalFailed { .. } => exit_codes::EXIT_RETRIEVAL_ERROR,
            Self::LogToolNotFound => exit_codes::EXIT_TOOL_NOT_FOUND,
            Self::RetrievalTimeout { .. } => exit_codes::EXIT_TIMEOUT,
            Self::Incompatible { .. } => exit_codes::EXIT_INCOMPATIBLE,
            Self::InvalidConfig { .. } => exit_codes::EXIT_CONFIG_ERROR,
            Self::IoError { .. } => exit_codes::EXIT_IO_ERROR,
            _ => exit_codes::EXIT_GENERAL_ERROR,
        }
    }
}

/// Result type alias for logsift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// The log command exited with a failure status.
    pub const EXIT_RETRIEVAL_ERROR: i32 = 2;
    /// The log command is not installed.
    pub const EXIT_TOOL_NOT_FOUND: i32 = 3;
    /// The log command timed out.
    pub const EXIT_TIMEOUT: i32 = 4;
    /// Platform incompatible with live queries.
    pub const EXIT_INCOMPATIBLE: i32 = 5;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 6;
    /// Invalid command-line usage (BSD standard).
    pub const EXIT_USAGE_ERROR: i32 = 64;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let timeout = SiftError::RetrievalTimeout { seconds: 30 };
        assert_eq!(timeout.exit_code(), 4);

        let not_found = SiftError::LogToolNotFound;
        assert_eq!(not_found.exit_code(), 3);

        let failed = SiftError::retrieval(Some(64), "bad predicate");
        assert_eq!(failed.exit_code(), 2);

        let incompatible = SiftError::incompatible("not macOS");
        assert_eq!(incompatible.exit_code(), 5);
    }

    #[test]
    fn test_retrieval_signal_exit() {
        // A signal-terminated child has no exit code; -1 stands in.
        let err = SiftError::retrieval(None, "");
        match err {
            SiftError::RetrievalFailed { code, .. } => assert_eq!(code, -1),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        let timeout = SiftError::RetrievalTimeout { seconds: 30 };
        assert_eq!(
            timeout.to_string(),
            "log command timed out after 30 seconds"
        );

        let failed = SiftError::retrieval(Some(1), "predicate syntax error");
        assert!(failed.to_string().contains("code 1"));
        assert!(failed.to_string().contains("predicate syntax error"));
    }
}
