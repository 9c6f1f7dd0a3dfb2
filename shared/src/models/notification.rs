//! Notification models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// Notification as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationApiItem {
    pub id: RecordId,
    #[serde(default)]
    pub priority: String,
    pub title: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub reference_id: Option<RecordId>,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub reference_type: Option<String>,
}

/// Display severity of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Critical,
    Warning,
    Info,
}

/// Display grouping of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    BatchStatus,
    Inventory,
    System,
    Expiry,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::BatchStatus => "batch_status",
            NotificationCategory::Inventory => "inventory",
            NotificationCategory::System => "system",
            NotificationCategory::Expiry => "expiry",
        }
    }
}

/// Notification shaped for the notification panel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    /// Relative time, e.g. "5 menit yang lalu"
    pub timestamp: String,
    pub batch_id: Option<RecordId>,
    pub is_read: bool,
    pub category: NotificationCategory,
    pub badge_variant: String,
    pub category_label: String,
    pub date: Option<DateTime<Utc>>,
}

/// Body of the mark-as-read call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadInput {
    pub notification_ids: Vec<String>,
}
