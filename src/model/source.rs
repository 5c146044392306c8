//! Named unified-log sources.
//!
//! Each source pairs an opaque predicate (passed through to `log show`
//! unmodified, never interpreted here) with the tag stamped onto the
//! records it yields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named unified-log source preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    /// All system logs, unfiltered.
    System,
    /// Kernel process logs.
    Kernel,
    /// Authentication events (loginwindow and sudo).
    Auth,
    /// Hardware events, drawn from kernel logs and keyword-filtered.
    Hardware,
    /// Power management subsystem.
    Power,
    /// Scheduler/launchd activity.
    Scheduler,
    /// Boot-related events.
    Boot,
}

impl LogSource {
    /// The predicate handed to `log show --predicate`. Empty means no
    /// predicate flag at all.
    #[must_use]
    pub const fn predicate(self) -> &'static str {
        match self {
            Self::System => "",
            Self::Kernel | Self::Hardware => r#"process == "kernel""#,
            Self::Auth => r#"process == "loginwindow" OR process == "sudo""#,
            Self::Power => r#"subsystem contains "power""#,
            Self::Scheduler => r#"process == "launchd""#,
            Self::Boot => r#"eventMessage contains "boot""#,
        }
    }

    /// The tag stamped onto records from this source.
    #[must_use]
    pub const fn log_type(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Kernel => "kernel",
            Self::Auth => "auth",
            Self::Hardware => "hardware",
            Self::Power => "power",
            Self::Scheduler => "scheduler",
            Self::Boot => "boot",
        }
    }

    /// All source presets, in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::System,
            Self::Kernel,
            Self::Auth,
            Self::Hardware,
            Self::Power,
            Self::Scheduler,
            Self::Boot,
        ]
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_has_empty_predicate() {
        assert_eq!(LogSource::System.predicate(), "");
    }

    #[test]
    fn test_hardware_shares_kernel_predicate() {
        assert_eq!(
            LogSource::Hardware.predicate(),
            LogSource::Kernel.predicate()
        );
        // But keeps its own tag.
        assert_eq!(LogSource::Hardware.log_type(), "hardware");
    }

    #[test]
    fn test_auth_predicate() {
        assert_eq!(
            LogSource::Auth.predicate(),
            r#"process == "loginwindow" OR process == "sudo""#
        );
    }

    #[test]
    fn test_display_matches_log_type() {
        for source in LogSource::all() {
            assert_eq!(source.to_string(), source.log_type());
        }
    }
}
