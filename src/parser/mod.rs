//! Parsers for macOS log sources.
//!
//! Three parsers share one contract: raw input in, ordered batch of records
//! out. Each implements [`LogParser`], which splits the work into the two
//! capabilities every source needs — retrieving raw input (a subprocess call
//! or a filesystem listing) and turning that input into records. The
//! parsers hold no state between calls beyond their configuration; records
//! are returned by value and owned by the caller.
//!
//! Error policy: a malformed line or file is dropped or skipped in place,
//! never surfaced per item. Only retrieval-level failures (see
//! [`crate::retrieval`]) become errors.
//!
//! # Example
//!
//! ```rust
//! use logsift::parser::UnifiedLogParser;
//!
//! let raw = "2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached";
//! let mut parser = UnifiedLogParser::new("", "system");
//! let records = parser.parse_text(raw);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].process, "kernel");
//! ```

mod crash;
mod package;
pub mod syslog;
mod unified;

pub use crash::*;
pub use package::*;
pub use syslog::{looks_like_log_line, parse_syslog_line};
pub use unified::*;

use crate::error::Result;

/// The common parser contract: fetch raw input, parse it into records.
///
/// Concrete parsers differ in what "raw input" means — a text blob for the
/// unified log, a file listing for crash reports and package logs — so the
/// input is an associated type rather than a fixed shape.
pub trait LogParser {
    /// Raw input this parser consumes.
    type Input;
    /// Record shape this parser emits.
    type Record;

    /// Retrieve the raw input from its source.
    fn fetch(&self) -> Result<Self::Input>;

    /// Turn already-fetched input into an ordered batch of records.
    fn parse_input(&mut self, input: &Self::Input) -> Vec<Self::Record>;

    /// Fetch then parse, in one call.
    fn parse(&mut self) -> Result<Vec<Self::Record>> {
        let input = self.fetch()?;
        Ok(self.parse_input(&input))
    }
}

/// Counters describing the last parse pass.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Total lines seen.
    pub lines_processed: usize,
    /// Lines that produced a record.
    pub records_parsed: usize,
    /// Non-empty lines that did not parse.
    pub lines_skipped: usize,
    /// Blank lines.
    pub empty_lines: usize,
}

impl ParseStats {
    /// Fraction of non-blank lines that parsed, as a percentage.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        let candidates = self.records_parsed + self.lines_skipped;
        if candidates == 0 {
            return 100.0;
        }
        (self.records_parsed as f64 / candidates as f64) * 100.0
    }
}
