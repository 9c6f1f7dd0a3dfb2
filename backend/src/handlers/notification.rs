//! HTTP handlers for notification endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;

use shared::models::{MarkReadInput, Notification};

use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::NotificationService;
use crate::AppState;

/// Notifications for the panel
pub async fn get_notifications(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Vec<Notification>>> {
    let service = NotificationService::new(state.inventory_api.clone());
    let notifications = service.list(token.as_str(), Utc::now()).await?;
    Ok(Json(notifications))
}

pub async fn get_notification_summary(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Value>> {
    let service = NotificationService::new(state.inventory_api.clone());
    Ok(Json(service.summary(token.as_str()).await?))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Value>> {
    let service = NotificationService::new(state.inventory_api.clone());
    Ok(Json(service.mark_all_read(token.as_str()).await?))
}

pub async fn mark_read(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<MarkReadInput>,
) -> AppResult<Json<Value>> {
    let service = NotificationService::new(state.inventory_api.clone());
    Ok(Json(service.mark_read(token.as_str(), input.notification_ids).await?))
}

pub async fn delete_notification(
    State(state): State<AppState>,
    token: SessionToken,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let service = NotificationService::new(state.inventory_api.clone());
    Ok(Json(service.delete(token.as_str(), &id).await?))
}
