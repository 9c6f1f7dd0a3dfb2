//! HTTP handlers for the dashboard

use axum::{extract::State, Json};
use serde_json::Value;

use shared::models::{DashboardOverview, DashboardSummary};

use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::DashboardService;
use crate::AppState;

/// All dashboard panels in one response
pub async fn get_dashboard(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<DashboardOverview>> {
    let service = DashboardService::new(state.inventory_api.clone());
    Ok(Json(service.overview(token.as_str()).await?))
}

pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<DashboardSummary>> {
    let service = DashboardService::new(state.inventory_api.clone());
    Ok(Json(service.summary(token.as_str()).await?))
}

pub async fn get_expiry_alerts(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Value>> {
    let service = DashboardService::new(state.inventory_api.clone());
    Ok(Json(service.expiry_alerts(token.as_str()).await?))
}

pub async fn get_waste_loss(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<Value>> {
    let service = DashboardService::new(state.inventory_api.clone());
    Ok(Json(service.waste_loss(token.as_str()).await?))
}
