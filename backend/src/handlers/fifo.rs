//! HTTP handlers for FIFO recommendations

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use shared::models::FifoRecommendation;

use super::LanguageQuery;
use crate::error::AppResult;
use crate::middleware::SessionToken;
use crate::services::fifo::{FifoListing, FifoService};
use crate::AppState;

/// Batches to use next, with progress and urgency badges
pub async fn fifo_batches(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<LanguageQuery>,
) -> AppResult<Json<Vec<FifoRecommendation>>> {
    let service = FifoService::new(state.inventory_api.clone());
    let recommendations = service
        .recommendations(token.as_str(), FifoListing::Eligible, query.language(), Utc::now())
        .await?;
    Ok(Json(recommendations))
}

/// All batches in priority order
pub async fn fifo_priority(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<LanguageQuery>,
) -> AppResult<Json<Vec<FifoRecommendation>>> {
    let service = FifoService::new(state.inventory_api.clone());
    let recommendations = service
        .recommendations(token.as_str(), FifoListing::ByPriority, query.language(), Utc::now())
        .await?;
    Ok(Json(recommendations))
}
