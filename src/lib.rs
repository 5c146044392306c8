//! logsift: extract structured records from macOS logs and diagnostic files.
//!
//! Three heterogeneous log sources, one output shape: unified-log text
//! (`log show` output in syslog style), crash reports (modern `.ips` JSON
//! and legacy `.crash` free text), and Homebrew/package-manager log files
//! all parse into ordered sequences of plain records.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use logsift::api::SiftClient;
//! use logsift::model::LogSource;
//!
//! fn main() -> logsift::Result<()> {
//!     let client = SiftClient::new()?;
//!
//!     for record in client.logs(LogSource::System, Some("15m"), Some(20))? {
//!         println!("{} {}[{}]: {}", record.timestamp, record.process, record.pid, record.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: the record shapes all parsers emit, plus named log sources
//! - [`parser`]: the three parsers and the pure syslog line parser
//! - [`retrieval`]: the `log show` subprocess call, with its 30s deadline
//! - [`discovery`]: crash report and package log file discovery
//! - [`filter`]: keyword post-filtering (hardware events)
//! - [`compat`]: macOS version and `log` tool probes
//! - [`api`]: high-level client tying the above together
//! - [`cli`]: command-line interface
//! - [`config`]: TOML configuration
//! - [`error`]: error types and exit codes
//!
//! # Error policy
//!
//! A line that does not parse is dropped; a file that does not parse is
//! skipped; a discovery root that does not exist yields an empty result.
//! Only whole-request failures — the retrieval subprocess timing out,
//! missing, or exiting non-zero — surface as [`SiftError`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod cli;
pub mod compat;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod retrieval;

// Re-export commonly used types at the crate root
pub use error::{Result, SiftError};
pub use model::{CrashFormat, CrashRecord, LogRecord, LogSource, PackageRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::api::SiftClient;
    pub use crate::error::{Result, SiftError};
    pub use crate::model::{CrashFormat, CrashRecord, LogRecord, LogSource, PackageRecord};
    pub use crate::parser::{
        CrashReportParser, LogParser, PackageLogParser, UnifiedLogParser,
    };
}
