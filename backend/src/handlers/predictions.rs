//! HTTP handlers for freshness predictions

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use shared::freshness::{AlertFilter, SpoilageAlert};
use shared::models::FreshnessStatusSummary;

use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::InventoryService;
use crate::AppState;

/// `?status=all|critical|warning`
#[derive(Debug, Deserialize)]
pub struct SpoilageAlertQuery {
    pub status: Option<String>,
}

/// Freshness breakdown in display order with chart colors
pub async fn get_freshness_summary(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Vec<FreshnessStatusSummary>>> {
    let service = InventoryService::new(state.inventory_api.clone());
    Ok(Json(service.freshness_summary(token.as_str()).await?))
}

pub async fn get_spoilage_alerts(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<SpoilageAlertQuery>,
) -> AppResult<Json<Vec<SpoilageAlert>>> {
    let service = InventoryService::new(state.inventory_api.clone());
    let filter = AlertFilter::parse(query.status.as_deref());
    let alerts = service
        .spoilage_alerts(token.as_str(), filter, Utc::now())
        .await?;
    Ok(Json(alerts))
}
