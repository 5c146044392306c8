//! Keyword post-filtering of unified-log records.
//!
//! Hardware events have no reliable predicate of their own, so they are
//! drawn from kernel logs and narrowed here by message keywords. The match
//! is case-insensitive "contains any".

use crate::model::LogRecord;

/// Keywords that mark a kernel log message as hardware-related.
pub const HARDWARE_KEYWORDS: [&str; 9] = [
    "USB",
    "storage",
    "disk",
    "device",
    "IOKit",
    "hardware",
    "PCI",
    "SATA",
    "Thunderbolt",
];

/// Keep only records whose message contains at least one keyword,
/// case-insensitively. Record order is preserved.
#[must_use]
pub fn filter_by_keywords(records: Vec<LogRecord>, keywords: &[&str]) -> Vec<LogRecord> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_uppercase()).collect();

    records
        .into_iter()
        .filter(|record| {
            let message = record.message.to_uppercase();
            keywords.iter().any(|k| message.contains(k))
        })
        .collect()
}
