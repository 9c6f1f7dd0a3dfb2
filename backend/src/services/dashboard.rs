//! Dashboard service

use serde_json::Value;

use shared::freshness::order_freshness_summary;
use shared::models::{DashboardOverview, DashboardSummary};

use crate::error::AppResult;
use crate::external::InventoryApiClient;

#[derive(Clone)]
pub struct DashboardService {
    api: InventoryApiClient,
}

impl DashboardService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    /// Stock summary with the freshness breakdown in display order
    pub async fn summary(&self, token: &str) -> AppResult<DashboardSummary> {
        let mut summary = self.api.dashboard_summary(token).await?;
        summary.freshness_status_summaries =
            order_freshness_summary(std::mem::take(&mut summary.freshness_status_summaries));
        Ok(summary)
    }

    pub async fn expiry_alerts(&self, token: &str) -> AppResult<Value> {
        self.api.expiry_alerts(token).await
    }

    pub async fn waste_loss(&self, token: &str) -> AppResult<Value> {
        self.api.potential_food_loss(token).await
    }

    /// All dashboard panels, fetched concurrently
    pub async fn overview(&self, token: &str) -> AppResult<DashboardOverview> {
        let (summary, expiry_alerts, waste_loss) = tokio::try_join!(
            self.summary(token),
            self.expiry_alerts(token),
            self.waste_loss(token),
        )?;

        Ok(DashboardOverview {
            summary,
            expiry_alerts,
            waste_loss,
        })
    }
}
