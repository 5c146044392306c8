//! High-level programmatic API.
//!
//! [`SiftClient`] bundles configuration, discovery, retrieval, and the
//! parsers behind one-call methods. The CLI commands are thin wrappers over
//! this type, and library consumers can use it directly:
//!
//! ```rust,no_run
//! use logsift::api::SiftClient;
//! use logsift::model::LogSource;
//!
//! fn main() -> logsift::Result<()> {
//!     let client = SiftClient::new()?;
//!
//!     for record in client.logs(LogSource::Kernel, Some("15m"), Some(10))? {
//!         println!("{} {}", record.timestamp, record.message);
//!     }
//!
//!     for crash in client.crash_reports(Some(5))? {
//!         println!("{} ({:?})", crash.file_name, crash.format);
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::filter::{filter_by_keywords, HARDWARE_KEYWORDS};
use crate::model::{CrashRecord, LogRecord, LogSource, PackageRecord};
use crate::parser::{CrashReportParser, LogParser, PackageLogParser, UnifiedLogParser};

/// Default record limit for the hardware source. Hardware events are
/// sparse, so the fetch is kept small to stay inside the query deadline.
const HARDWARE_DEFAULT_LIMIT: usize = 10;

/// Cap on how many kernel records are fetched before keyword filtering.
const HARDWARE_FETCH_CAP: usize = 30;

/// Default and maximum record limit for the boot source.
const BOOT_LIMIT_CAP: usize = 50;

/// High-level client over all log sources.
#[derive(Debug, Clone, Default)]
pub struct SiftClient {
    config: Config,
}

impl SiftClient {
    /// Create a client using configuration from the default location.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config: Config::load()?,
        })
    }

    /// Create a client with explicit configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and parse unified logs for a named source.
    ///
    /// `time_period` and `limit` fall back to configured defaults. The
    /// hardware and boot sources get their own shaping: hardware clamps
    /// long windows, over-fetches kernel records, and keyword-filters
    /// them; boot clamps both window and limit to keep `contains`
    /// predicates from timing out.
    pub fn logs(
        &self,
        source: LogSource,
        time_period: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<LogRecord>> {
        let period = time_period.unwrap_or(&self.config.defaults.time_period);

        match source {
            LogSource::Hardware => {
                let limit = match limit {
                    None | Some(0) => HARDWARE_DEFAULT_LIMIT,
                    Some(n) => n,
                };
                let fetch_limit = limit.saturating_mul(3).min(HARDWARE_FETCH_CAP);
                let period = if matches!(period, "24h" | "7d") { "1h" } else { period };

                let mut parser = UnifiedLogParser::for_source(source)
                    .with_time_period(period)
                    .with_limit(Some(fetch_limit));
                let records = parser.parse()?;

                let mut filtered = filter_by_keywords(records, &HARDWARE_KEYWORDS);
                if filtered.len() > limit {
                    filtered.truncate(limit);
                }
                Ok(filtered)
            }
            LogSource::Boot => {
                let limit = match limit {
                    None | Some(0) => BOOT_LIMIT_CAP,
                    Some(n) => n.min(BOOT_LIMIT_CAP),
                };
                let period = if matches!(period, "1h" | "5m" | "15m" | "30m") {
                    period
                } else {
                    "1h"
                };

                let mut parser = UnifiedLogParser::for_source(source)
                    .with_time_period(period)
                    .with_limit(Some(limit));
                parser.parse()
            }
            _ => {
                let mut parser = UnifiedLogParser::for_source(source)
                    .with_time_period(period)
                    .with_limit(limit);
                parser.parse()
            }
        }
    }

    /// Fetch and parse unified logs with an explicit predicate.
    pub fn logs_with_predicate(
        &self,
        predicate: &str,
        log_type: &str,
        time_period: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<LogRecord>> {
        let period = time_period.unwrap_or(&self.config.defaults.time_period);
        let mut parser = UnifiedLogParser::new(predicate, log_type)
            .with_time_period(period)
            .with_limit(limit);
        parser.parse()
    }

    /// Discover and parse crash reports, newest first.
    pub fn crash_reports(&self, limit: Option<usize>) -> Result<Vec<CrashRecord>> {
        let limit = limit.or(Some(self.config.defaults.crash_limit));
        let mut parser = CrashReportParser::new(limit).with_roots(self.crash_roots());
        parser.parse()
    }

    /// Discover and parse package logs, newest first.
    pub fn package_logs(&self, limit: Option<usize>) -> Result<Vec<PackageRecord>> {
        let limit = limit.or(Some(self.config.defaults.package_limit));
        let mut parser = PackageLogParser::new(limit).with_roots(self.package_roots());
        parser.parse()
    }

    fn crash_roots(&self) -> Vec<PathBuf> {
        self.config
            .paths
            .crash_report_dirs
            .clone()
            .unwrap_or_else(discovery::default_crash_roots)
    }

    fn package_roots(&self) -> Vec<PathBuf> {
        self.config
            .paths
            .package_log_dirs
            .clone()
            .unwrap_or_else(discovery::default_package_roots)
    }
}
