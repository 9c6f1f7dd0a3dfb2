//! Notification service

use chrono::{DateTime, Utc};
use serde_json::Value;

use shared::models::Notification;
use shared::notification::transform_notifications;

use crate::error::{AppError, AppResult};
use crate::external::InventoryApiClient;

#[derive(Clone)]
pub struct NotificationService {
    api: InventoryApiClient,
}

impl NotificationService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    /// Notifications shaped for the panel, in backend order
    pub async fn list(&self, token: &str, now: DateTime<Utc>) -> AppResult<Vec<Notification>> {
        let page = self.api.notifications(token).await?;
        Ok(transform_notifications(page.content, now))
    }

    pub async fn summary(&self, token: &str) -> AppResult<Value> {
        self.api.notification_summary(token).await
    }

    pub async fn mark_all_read(&self, token: &str) -> AppResult<Value> {
        self.api.mark_all_notifications_read(token).await
    }

    pub async fn mark_read(&self, token: &str, ids: Vec<String>) -> AppResult<Value> {
        if ids.is_empty() {
            return Err(AppError::Validation {
                field: "notificationIds".to_string(),
                message: "At least one notification id is required".to_string(),
                message_id: "Pilih minimal satu notifikasi.".to_string(),
            });
        }
        self.api.mark_notifications_read(token, &ids).await
    }

    pub async fn delete(&self, token: &str, id: &str) -> AppResult<Value> {
        if id.trim().is_empty() {
            return Err(AppError::NotFound("Notification".to_string()));
        }
        self.api.delete_notification(token, id).await
    }
}
