//! Forecast service combining the prediction service with inventory data

use serde_json::Value;

use shared::forecast::purchase_plan;
use shared::models::{ForecastDateRange, PredictionDashboard, PurchasePlan};

use crate::error::AppResult;
use crate::external::{InventoryApiClient, PredictionClient};

#[derive(Clone)]
pub struct ForecastService {
    api: InventoryApiClient,
    prediction: PredictionClient,
}

impl ForecastService {
    pub fn new(api: InventoryApiClient, prediction: PredictionClient) -> Self {
        Self { api, prediction }
    }

    pub async fn forecast(&self) -> AppResult<Value> {
        self.prediction.forecast().await
    }

    /// Prediction dashboard for the selected window
    pub async fn dashboard(&self, range: &ForecastDateRange) -> AppResult<Value> {
        self.prediction.prediction_dashboard(range.from, range.to).await
    }

    /// Actual usage over the window preceding the forecast, for comparison
    pub async fn ingredient_usage(&self, token: &str, range: &ForecastDateRange) -> AppResult<Value> {
        self.api
            .ingredient_usage(token, range.last_from, range.last_to)
            .await
    }

    /// Purchase advice from predicted demand and current stock
    pub async fn purchase_plan(&self, token: &str, range: &ForecastDateRange) -> AppResult<PurchasePlan> {
        let (prediction, batches) = tokio::try_join!(
            self.prediction
                .prediction_dashboard::<PredictionDashboard>(range.from, range.to),
            self.api.list_batches(token),
        )?;

        let plan = purchase_plan(&prediction, &batches);
        tracing::debug!(
            "Purchase plan: {} items, {} short, {} over",
            plan.items.len(),
            plan.stockout.len(),
            plan.overstock.len()
        );
        Ok(plan)
    }
}
