//! CLI command implementations.

pub mod check;
pub mod crashes;
pub mod packages;
pub mod show;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::error::Result;

/// Print a slice of records as pretty JSON.
pub(crate) fn print_json<T: Serialize>(records: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Render an epoch-seconds mtime as an absolute UTC timestamp.
pub(crate) fn format_mtime(epoch_seconds: f64) -> String {
    chrono::DateTime::from_timestamp(epoch_seconds as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Render an epoch-seconds mtime as a relative age, e.g. `2h 5m ago`.
pub(crate) fn format_age(epoch_seconds: f64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    let delta = (now - epoch_seconds).max(0.0) as u64;
    // Whole-minute granularity keeps the output stable and short.
    let rounded = Duration::from_secs(delta - delta % 60);
    if rounded.is_zero() {
        "just now".to_string()
    } else {
        format!("{} ago", humantime::format_duration(rounded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mtime() {
        assert_eq!(format_mtime(0.0), "1970-01-01 00:00:00");
        assert_eq!(format_mtime(1_705_314_645.0), "2024-01-15 10:30:45");
    }

    #[test]
    fn test_format_age_recent() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();
        assert_eq!(format_age(now), "just now");
        assert_eq!(format_age(now - 3660.0), "1h 1m ago");
    }
}
