//! Inventory service: batch listing, registration and spoilage alerts

use chrono::{DateTime, Utc};
use serde_json::Value;
use validator::Validate;

use shared::freshness::{order_freshness_summary, spoilage_alerts, AlertFilter, SpoilageAlert};
use shared::inventory::InventoryQuery;
use shared::models::{Batch, CreateBatchInput, FreshnessStatusSummary};

use crate::error::AppResult;
use crate::external::InventoryApiClient;

#[derive(Clone)]
pub struct InventoryService {
    api: InventoryApiClient,
}

impl InventoryService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    /// List batches filtered by category and search text, newest first
    pub async fn list_batches(&self, token: &str, query: &InventoryQuery) -> AppResult<Vec<Batch>> {
        let batches = self.api.list_batches(token).await?;
        Ok(query.apply(batches))
    }

    pub async fn create_batch(&self, token: &str, input: CreateBatchInput) -> AppResult<Value> {
        input.validate()?;
        let created = self.api.create_batch(token, &input).await?;
        tracing::info!(
            "Batch registered for {}",
            input.ingredient_name.as_deref().unwrap_or_default()
        );
        Ok(created)
    }

    pub async fn spoilage_alerts(
        &self,
        token: &str,
        filter: AlertFilter,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<SpoilageAlert>> {
        let batches = self.api.list_batches(token).await?;
        Ok(spoilage_alerts(&batches, filter, now))
    }

    pub async fn freshness_summary(&self, token: &str) -> AppResult<Vec<FreshnessStatusSummary>> {
        let summary = self.api.freshness_summary(token).await?;
        Ok(order_freshness_summary(summary))
    }
}
