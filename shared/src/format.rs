//! Date parsing and formatting helpers

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a backend timestamp.
///
/// Accepts RFC 3339, naive date-times (read as UTC) and plain dates
/// (midnight UTC). Returns `None` for anything else.
///
/// Naive values are always UTC, never the host's local zone.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp as `dd Month yyyy`, e.g. `05 March 2024`
pub fn format_date(value: &str) -> Option<String> {
    let date = parse_timestamp(value)?;
    let month = MONTHS_EN[date.month0() as usize];
    Some(format!("{:02} {} {}", date.day(), month, date.year()))
}

/// Format a date the way the prediction service expects it
pub fn format_date_to_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
