//! Shaping of backend notifications for the notification panel

use chrono::{DateTime, Utc};

use crate::format::parse_timestamp;
use crate::models::{Notification, NotificationApiItem, NotificationCategory, NotificationType};

/// Severity from the backend priority, case-insensitive
pub fn map_priority_to_type(priority: &str) -> NotificationType {
    match priority.to_uppercase().as_str() {
        "HIGH" => NotificationType::Critical,
        "MEDIUM" => NotificationType::Warning,
        _ => NotificationType::Info,
    }
}

pub fn map_reference_type_to_category(reference_type: Option<&str>) -> NotificationCategory {
    match reference_type {
        Some("BATCH") => NotificationCategory::Inventory,
        _ => NotificationCategory::System,
    }
}

/// Relative age such as `"5 menit yang lalu"`.
///
/// Whole minutes below an hour, whole hours below a day, days otherwise.
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_milliseconds().div_euclid(60_000);
    if minutes < 60 {
        return format!("{} menit yang lalu", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} jam yang lalu", hours);
    }
    format!("{} hari yang lalu", hours / 24)
}

pub fn badge_variant(kind: NotificationType) -> &'static str {
    match kind {
        NotificationType::Critical => "destructive",
        NotificationType::Warning => "secondary",
        NotificationType::Info => "default",
    }
}

/// Label of a category code; unknown codes read "Lainnya"
pub fn category_label(category: &str) -> &'static str {
    match category {
        "batch_status" => "Status Batch",
        "inventory" => "Inventaris",
        "system" => "Sistem",
        "expiry" => "Kadaluarsa",
        _ => "Lainnya",
    }
}

pub fn transform_notification(item: NotificationApiItem, now: DateTime<Utc>) -> Notification {
    let kind = map_priority_to_type(&item.priority);
    let category = map_reference_type_to_category(item.reference_type.as_deref());
    let date = parse_timestamp(&item.created_at);
    let timestamp = date
        .map(|created| format_time_ago(created, now))
        .unwrap_or_else(|| "-".to_string());

    Notification {
        id: item.id,
        kind,
        title: item.title,
        message: item.message,
        timestamp,
        batch_id: item.reference_id,
        is_read: item.read,
        category,
        badge_variant: badge_variant(kind).to_string(),
        category_label: category_label(category.as_str()).to_string(),
        date,
    }
}

pub fn transform_notifications(items: Vec<NotificationApiItem>, now: DateTime<Utc>) -> Vec<Notification> {
    items
        .into_iter()
        .map(|item| transform_notification(item, now))
        .collect()
}
