//! HTTP handlers for ingredient usage

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use shared::models::{ManualUsageInput, MenuUsageInput, UsageRecord};

use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::UsageService;
use crate::AppState;

pub async fn list_menus(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Value>> {
    let service = UsageService::new(state.inventory_api.clone());
    Ok(Json(service.menus(token.as_str()).await?))
}

pub async fn use_for_menu(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<MenuUsageInput>,
) -> AppResult<Json<Value>> {
    let service = UsageService::new(state.inventory_api.clone());
    Ok(Json(service.use_for_menu(token.as_str(), input).await?))
}

pub async fn use_manual(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<ManualUsageInput>,
) -> AppResult<Json<Value>> {
    let service = UsageService::new(state.inventory_api.clone());
    Ok(Json(service.use_manual(token.as_str(), input).await?))
}

/// Record a usage entry
pub async fn record_usage(
    State(state): State<AppState>,
    token: SessionToken,
    Json(record): Json<UsageRecord>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let service = UsageService::new(state.inventory_api.clone());
    let recorded = service.record(token.as_str(), record).await?;
    Ok((StatusCode::CREATED, Json(recorded)))
}
