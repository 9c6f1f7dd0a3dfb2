//! HTTP handlers for demand forecasting

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use shared::forecast::forecast_date_range;
use shared::models::{ForecastDateRange, PurchasePlan};
use shared::validation::validate_date_range;

use crate::error::{AppError, AppResult};
use crate::middleware::SessionToken;
use crate::services::ForecastService;
use crate::AppState;

/// `?from=yyyy-MM-dd&to=yyyy-MM-dd`
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ForecastQuery {
    fn resolve(&self) -> AppResult<ForecastDateRange> {
        let range = forecast_date_range(self.from, self.to, Utc::now().date_naive());
        validate_date_range(range.from, range.to).map_err(|message_id| AppError::Validation {
            field: "to".to_string(),
            message: "End date must not be before start date".to_string(),
            message_id: message_id.to_string(),
        })?;
        Ok(range)
    }
}

fn forecast_service(state: &AppState) -> ForecastService {
    ForecastService::new(state.inventory_api.clone(), state.prediction.clone())
}

pub async fn get_forecast(State(state): State<AppState>) -> AppResult<Json<Value>> {
    Ok(Json(forecast_service(&state).forecast().await?))
}

pub async fn get_forecast_dashboard(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Value>> {
    let range = query.resolve()?;
    Ok(Json(forecast_service(&state).dashboard(&range).await?))
}

/// Actual usage over the window preceding the forecast
pub async fn get_forecast_usage(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Value>> {
    let range = query.resolve()?;
    let usage = forecast_service(&state)
        .ingredient_usage(token.as_str(), &range)
        .await?;
    Ok(Json(usage))
}

/// Purchase plan for the forecast window
pub async fn get_purchase_recommendations(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<PurchasePlan>> {
    let range = query.resolve()?;
    let plan = forecast_service(&state)
        .purchase_plan(token.as_str(), &range)
        .await?;
    Ok(Json(plan))
}
