//! HTTP handlers for batch inventory endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use shared::inventory::InventoryQuery;
use shared::models::{Batch, CreateBatchInput};

use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::InventoryService;
use crate::AppState;

/// List batches, filtered by `category` and `search`
pub async fn list_batches(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<Vec<Batch>>> {
    let service = InventoryService::new(state.inventory_api.clone());
    let batches = service.list_batches(token.as_str(), &query).await?;
    Ok(Json(batches))
}

/// Register a new batch
pub async fn create_batch(
    State(state): State<AppState>,
    token: SessionToken,
    Json(input): Json<CreateBatchInput>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let service = InventoryService::new(state.inventory_api.clone());
    let created = service.create_batch(token.as_str(), input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
