//! Demand forecast models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Forecast window plus the equally long window preceding it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub last_from: NaiveDate,
    pub last_to: NaiveDate,
}

/// Response of the prediction service dashboard endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionDashboard {
    #[serde(default)]
    pub prediction_summary: PredictionSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionSummary {
    #[serde(default)]
    pub latest_item_prices: Vec<ItemPrice>,
    #[serde(default)]
    pub total_predicted_demand: Vec<PredictedDemand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPrice {
    #[serde(rename = "Nama_Barang")]
    pub item_name: String,
    #[serde(rename = "Harga_Satuan", default)]
    pub unit_price: Decimal,
    #[serde(rename = "Kategori", default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictedDemand {
    #[serde(rename = "Nama_Barang")]
    pub item_name: String,
    #[serde(rename = "Prediksi_Kebutuhan_Total_kg", default)]
    pub total_kg: Decimal,
    #[serde(rename = "Prediksi_Harian_Rata2_kg", default)]
    pub daily_average_kg: Decimal,
}

/// Stock coverage of a predicted demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    Kritis,
    Perlu,
    Aman,
}

/// Direction of the predicted daily demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Purchase advice for one ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecommendation {
    pub ingredient_name: String,
    pub category: String,
    pub current_stock: Decimal,
    pub predicted_demand: Decimal,
    pub recommended_purchase: Decimal,
    pub estimated_price: Decimal,
    pub status: StockStatus,
    pub trend: Trend,
}

/// Recommendations split the way the forecast page shows them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePlan {
    pub items: Vec<PurchaseRecommendation>,
    pub stockout: Vec<PurchaseRecommendation>,
    pub overstock: Vec<PurchaseRecommendation>,
}
