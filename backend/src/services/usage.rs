//! Usage recording service

use serde_json::Value;
use validator::Validate;

use shared::models::{ManualUsageInput, MenuUsageInput, UsageRecord};

use crate::error::AppResult;
use crate::external::InventoryApiClient;

#[derive(Clone)]
pub struct UsageService {
    api: InventoryApiClient,
}

impl UsageService {
    pub fn new(api: InventoryApiClient) -> Self {
        Self { api }
    }

    pub async fn menus(&self, token: &str) -> AppResult<Value> {
        self.api.menus(token).await
    }

    /// Consume batches FIFO for a number of menu portions
    pub async fn use_for_menu(&self, token: &str, input: MenuUsageInput) -> AppResult<Value> {
        input.validate()?;
        self.api.use_for_menu(token, &input).await
    }

    /// Consume a chosen batch directly
    pub async fn use_manual(&self, token: &str, input: ManualUsageInput) -> AppResult<Value> {
        input.validate()?;
        self.api.use_manual(token, &input).await
    }

    pub async fn record(&self, token: &str, record: UsageRecord) -> AppResult<Value> {
        record.validate()?;
        let recorded = self.api.record_usage(token, &record).await?;
        tracing::info!("Recorded {} of batch {}", record.used_weight, record.batch_code);
        Ok(recorded)
    }
}
