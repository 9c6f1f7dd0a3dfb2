//! Dashboard aggregates computed by the backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FreshnessStatus;

/// Headline stock figures
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_active_batches: u64,
    #[serde(default)]
    pub total_active_weight: Decimal,
    #[serde(default)]
    pub ingredient_summaries: Vec<IngredientSummary>,
    #[serde(default)]
    pub storage_location_summaries: Vec<StorageLocationSummary>,
    #[serde(default)]
    pub freshness_status_summaries: Vec<FreshnessStatusSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSummary {
    pub ingredient_name: String,
    pub batch_count: u64,
    pub total_weight: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLocationSummary {
    pub location: String,
    pub batch_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessStatusSummary {
    pub status: FreshnessStatus,
    pub count: u64,
    /// Filled in by the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

/// Everything the dashboard page needs in one response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub expiry_alerts: serde_json::Value,
    pub waste_loss: serde_json::Value,
}
