//! Unified-log blob parsing.
//!
//! Takes the full text output of a `log show` run and produces ordered
//! [`LogRecord`]s, one per parseable line. Source line order is always
//! preserved; the parser never re-sorts by timestamp.

use tracing::debug;

use crate::error::Result;
use crate::model::{LogRecord, LogSource};
use crate::parser::syslog::{looks_like_log_line, parse_syslog_line};
use crate::parser::{LogParser, ParseStats};
use crate::retrieval;

/// Default time window handed to `log show --last`.
pub const DEFAULT_TIME_PERIOD: &str = "1h";

/// Default `log show` output style. Only syslog style is parsed here.
pub const DEFAULT_STYLE: &str = "syslog";

/// Parser for unified-log text in syslog style.
///
/// The predicate is opaque: it is passed through to `log show` unmodified
/// and never interpreted. `log_type` is stamped onto every record so mixed
/// batches stay attributable.
#[derive(Debug, Clone)]
pub struct UnifiedLogParser {
    predicate: String,
    log_type: String,
    time_period: String,
    limit: Option<usize>,
    style: String,
    stats: ParseStats,
}

impl UnifiedLogParser {
    /// Create a parser with the given predicate and record tag.
    #[must_use]
    pub fn new(predicate: impl Into<String>, log_type: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            log_type: log_type.into(),
            time_period: DEFAULT_TIME_PERIOD.to_string(),
            limit: None,
            style: DEFAULT_STYLE.to_string(),
            stats: ParseStats::default(),
        }
    }

    /// Create a parser preset for a named source.
    #[must_use]
    pub fn for_source(source: LogSource) -> Self {
        Self::new(source.predicate(), source.log_type())
    }

    /// Set the time window passed to `log show --last`.
    #[must_use]
    pub fn with_time_period(mut self, period: impl Into<String>) -> Self {
        self.time_period = period.into();
        self
    }

    /// Set the maximum number of records returned. Zero means unlimited.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Counters from the most recent [`parse_text`](Self::parse_text) call.
    #[must_use]
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Parse a raw unified-log blob into ordered records.
    ///
    /// Lines that fail the shape precheck, fail to parse, or parse without
    /// a timestamp are dropped silently. The limit (when non-zero) is
    /// applied after filtering, preserving source order — the first N
    /// surviving lines win, regardless of their timestamps.
    pub fn parse_text(&mut self, raw: &str) -> Vec<LogRecord> {
        self.stats = ParseStats::default();

        let raw = raw.trim();
        if raw.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::new();
        for line in raw.lines() {
            self.stats.lines_processed += 1;

            if line.trim().is_empty() {
                self.stats.empty_lines += 1;
                continue;
            }

            // Header and ruler lines from `log show` fail the shape check.
            if !looks_like_log_line(line) {
                self.stats.lines_skipped += 1;
                continue;
            }

            match parse_syslog_line(line, &self.log_type) {
                Some(record) if !record.timestamp.is_empty() => {
                    self.stats.records_parsed += 1;
                    records.push(record);
                }
                _ => self.stats.lines_skipped += 1,
            }
        }

        if let Some(limit) = self.limit {
            if limit > 0 && records.len() > limit {
                records.truncate(limit);
            }
        }

        debug!(
            parsed = self.stats.records_parsed,
            skipped = self.stats.lines_skipped,
            "parsed unified log text"
        );

        records
    }
}

impl LogParser for UnifiedLogParser {
    type Input = String;
    type Record = LogRecord;

    /// Run `log show` for this parser's window, style, and predicate.
    fn fetch(&self) -> Result<String> {
        retrieval::fetch_unified_log(&self.predicate, &self.time_period, &self.style)
    }

    fn parse_input(&mut self, input: &String) -> Vec<LogRecord> {
        self.parse_text(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "\
Timestamp                       (process)[PID]
2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached
2024-01-15 10:30:46.000000-0800  MyMac  launchd[1]: service started

2024-01-15 10:30:47.500000-0800  MyMac  sudo[512]: <Error>: auth failure
garbage line that is long enough to pass nothing
";

    #[test]
    fn test_parses_valid_lines_in_order() {
        let mut parser = UnifiedLogParser::new("", "system");
        let records = parser.parse_text(SAMPLE);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].process, "kernel");
        assert_eq!(records[1].process, "launchd");
        assert_eq!(records[2].process, "sudo");
        // Source order, not timestamp order.
        assert!(records[0].timestamp < records[1].timestamp);
    }

    #[test]
    fn test_header_and_garbage_skipped() {
        let mut parser = UnifiedLogParser::new("", "system");
        parser.parse_text(SAMPLE);

        let stats = parser.stats();
        assert_eq!(stats.records_parsed, 3);
        assert_eq!(stats.lines_skipped, 2);
        assert_eq!(stats.empty_lines, 1);
    }

    #[test]
    fn test_empty_input() {
        let mut parser = UnifiedLogParser::new("", "system");
        assert!(parser.parse_text("").is_empty());
        assert!(parser.parse_text("   \n  \n").is_empty());
    }

    #[test]
    fn test_limit_truncates_after_filtering() {
        let mut parser = UnifiedLogParser::new("", "system").with_limit(Some(2));
        let records = parser.parse_text(SAMPLE);

        assert_eq!(records.len(), 2);
        // First two surviving lines, same as the unlimited prefix.
        assert_eq!(records[0].process, "kernel");
        assert_eq!(records[1].process, "launchd");
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let mut parser = UnifiedLogParser::new("", "system").with_limit(Some(0));
        assert_eq!(parser.parse_text(SAMPLE).len(), 3);
    }

    #[test]
    fn test_records_tagged_with_log_type() {
        let mut parser = UnifiedLogParser::for_source(LogSource::Kernel);
        let records = parser.parse_text(
            "2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: up",
        );
        assert_eq!(records[0].log_type, "kernel");
    }

    #[test]
    fn test_raw_round_trip() {
        let line = "2024-01-15 10:30:45.123456-0800  MyMac  kernel[0]: <Notice>: USB device attached";
        let mut parser = UnifiedLogParser::new("", "system");
        let records = parser.parse_text(line);
        assert_eq!(records[0].raw, line);
    }
}
