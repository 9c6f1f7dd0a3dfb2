//! FIFO recommendation display logic
//!
//! Expiry progress drives the progress bar of each recommended batch and the
//! urgency mapping turns the backend urgency level into a badge.

use chrono::{DateTime, Utc};

use crate::format::parse_timestamp;
use crate::models::{FifoBatch, FifoRecommendation, UrgencyLevel};
use crate::types::Language;

const NEUTRAL_LABEL: &str = "-";
const NEUTRAL_COLOR: &str = "border-gray-500 text-gray-500";

/// Percentage of a batch's shelf life that has elapsed at `now`, in `0..=100`.
///
/// An empty or inverted range (`expiry <= entry`) counts as fully consumed.
pub fn calculate_progress(entry: DateTime<Utc>, expiry: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    let entry_ms = entry.timestamp_millis();
    let expiry_ms = expiry.timestamp_millis();

    if expiry_ms <= entry_ms {
        return 100;
    }

    let total = (expiry_ms - entry_ms) as f64;
    let elapsed = (now.timestamp_millis() - entry_ms) as f64;

    // half-up rounding
    let percent = (elapsed / total * 100.0 + 0.5).floor();
    percent.clamp(0.0, 100.0) as u8
}

/// Same as [`calculate_progress`] for backend date strings.
///
/// Returns `None` when either date cannot be parsed; callers decide how to
/// render that.
pub fn calculate_progress_str(entry: &str, expiry: &str, now: DateTime<Utc>) -> Option<u8> {
    let entry = parse_timestamp(entry)?;
    let expiry = parse_timestamp(expiry)?;
    Some(calculate_progress(entry, expiry, now))
}

/// Display label of an urgency level
pub fn urgency_label(level: &UrgencyLevel, language: Language) -> &'static str {
    match (level, language) {
        (UrgencyLevel::Critical, Language::Indonesian) => "Sangat Tinggi",
        (UrgencyLevel::High, Language::Indonesian) => "Tinggi",
        (UrgencyLevel::Medium, Language::Indonesian) => "Sedang",
        (UrgencyLevel::Low, Language::Indonesian) => "Kecil",
        (UrgencyLevel::Critical, Language::English) => "Very High",
        (UrgencyLevel::High, Language::English) => "High",
        (UrgencyLevel::Medium, Language::English) => "Medium",
        (UrgencyLevel::Low, Language::English) => "Low",
        (UrgencyLevel::Unknown(_), _) => NEUTRAL_LABEL,
    }
}

/// CSS classes of the urgency badge
pub fn urgency_color(level: &UrgencyLevel) -> &'static str {
    match level {
        UrgencyLevel::Critical => "border-red-500 text-red-500",
        UrgencyLevel::High => "border-orange-500 text-orange-500",
        UrgencyLevel::Medium => "border-yellow-500 text-yellow-500",
        UrgencyLevel::Low => "border-green-500 text-green-500",
        UrgencyLevel::Unknown(_) => NEUTRAL_COLOR,
    }
}

/// Indonesian label for a raw urgency code
pub fn map_urgency_to_label(code: &str) -> &'static str {
    urgency_label(&UrgencyLevel::from_code(code), Language::Indonesian)
}

/// Badge classes for a raw urgency code
pub fn map_urgency_to_color(code: &str) -> &'static str {
    urgency_color(&UrgencyLevel::from_code(code))
}

/// Remaining shelf life as shown in the FIFO table
pub fn expiry_label(days_until_expiry: i64, language: Language) -> String {
    match language {
        Language::Indonesian if days_until_expiry < 0 => "Kadaluarsa".to_string(),
        Language::Indonesian => format!("{} hari", days_until_expiry),
        Language::English if days_until_expiry < 0 => "Expired".to_string(),
        Language::English => format!("{} days", days_until_expiry),
    }
}

/// Attach the display fields to a FIFO batch
pub fn recommend(batch: FifoBatch, now: DateTime<Utc>, language: Language) -> FifoRecommendation {
    let progress = calculate_progress_str(&batch.entry_date, &batch.expiry_date, now);
    let urgency_label = urgency_label(&batch.urgency_level, language).to_string();
    let urgency_color = urgency_color(&batch.urgency_level).to_string();
    let expiry_label = expiry_label(batch.days_until_expiry, language);

    FifoRecommendation {
        batch,
        progress,
        urgency_label,
        urgency_color,
        expiry_label,
    }
}
