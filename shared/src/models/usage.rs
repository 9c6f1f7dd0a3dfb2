//! Ingredient usage models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_positive_decimal;

/// Kind of consumption being recorded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageType {
    MenuCooking,
    Preparation,
    Snack,
    Other,
}

/// A usage record sent to the backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub batch_code: String,
    #[validate(custom = "validate_positive_decimal")]
    pub used_weight: Decimal,
    pub usage_type: UsageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_name: Option<String>,
    #[validate(range(min = 1, message = "Jumlah porsi harus lebih dari 0."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Consume ingredients for a number of menu portions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuUsageInput {
    #[validate(required(message = "Pilih menu."))]
    pub menu_id: Option<String>,
    #[validate(
        required(message = "Masukkan jumlah porsi."),
        length(min = 1, message = "Masukkan jumlah porsi.")
    )]
    pub portion_count: Option<String>,
}

/// Consume a specific batch by weight
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ManualUsageInput {
    #[validate(required(message = "Pilih bahan."))]
    pub ingredient_name: Option<String>,
    #[validate(required(message = "Pilih batch."))]
    pub batch_code: Option<String>,
    #[validate(
        required(message = "Masukkan jumlah yang digunakan."),
        length(min = 1, message = "Masukkan jumlah yang digunakan.")
    )]
    pub used_weight: Option<String>,
    #[validate(required(message = "Pilih satuan."))]
    pub satuan: Option<String>,
}
