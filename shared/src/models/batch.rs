//! Ingredient batch models

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{string_or_empty, RecordId};

/// Backend-computed urgency of consuming a batch.
///
/// Values the backend may add later are kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
    Unknown(String),
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
            UrgencyLevel::Unknown(raw) => raw,
        }
    }

    /// Parse a backend code. Matching is exact.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CRITICAL" => UrgencyLevel::Critical,
            "HIGH" => UrgencyLevel::High,
            "MEDIUM" => UrgencyLevel::Medium,
            "LOW" => UrgencyLevel::Low,
            other => UrgencyLevel::Unknown(other.to_string()),
        }
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        UrgencyLevel::Unknown(String::new())
    }
}

impl From<String> for UrgencyLevel {
    fn from(value: String) -> Self {
        UrgencyLevel::from_code(&value)
    }
}

impl From<UrgencyLevel> for String {
    fn from(value: UrgencyLevel) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend-computed freshness of a batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FreshnessStatus {
    Green,
    Yellow,
    Red,
    Expired,
    Unknown(String),
}

impl FreshnessStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FreshnessStatus::Green => "GREEN",
            FreshnessStatus::Yellow => "YELLOW",
            FreshnessStatus::Red => "RED",
            FreshnessStatus::Expired => "EXPIRED",
            FreshnessStatus::Unknown(raw) => raw,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "GREEN" => FreshnessStatus::Green,
            "YELLOW" => FreshnessStatus::Yellow,
            "RED" => FreshnessStatus::Red,
            "EXPIRED" => FreshnessStatus::Expired,
            other => FreshnessStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FreshnessStatus {
    fn from(value: String) -> Self {
        FreshnessStatus::from_code(&value)
    }
}

impl From<FreshnessStatus> for String {
    fn from(value: FreshnessStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Ingredient categories used by the inventory filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientCategory {
    Sayuran,
    Buah,
    Protein,
    BahanPokok,
}

impl IngredientCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Sayuran => "SAYURAN",
            IngredientCategory::Buah => "BUAH",
            IngredientCategory::Protein => "PROTEIN",
            IngredientCategory::BahanPokok => "BAHAN_POKOK",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SAYURAN" => Some(IngredientCategory::Sayuran),
            "BUAH" => Some(IngredientCategory::Buah),
            "PROTEIN" => Some(IngredientCategory::Protein),
            "BAHAN_POKOK" => Some(IngredientCategory::BahanPokok),
            _ => None,
        }
    }
}

/// A tracked quantity of a fresh ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub batch_code: String,
    pub ingredient_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub entry_date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub expiry_date: String,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub freshness_status: Option<FreshnessStatus>,
    #[serde(default)]
    pub active: bool,
}

/// A batch as listed by the FIFO recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoBatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub batch_code: String,
    pub ingredient_name: String,
    #[serde(default)]
    pub weight: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub entry_date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub expiry_date: String,
    #[serde(default)]
    pub days_until_expiry: i64,
    #[serde(default)]
    pub urgency_level: UrgencyLevel,
}

/// FIFO batch enriched with display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FifoRecommendation {
    #[serde(flatten)]
    pub batch: FifoBatch,
    /// Consumed shelf life in percent, `None` when the dates are malformed
    pub progress: Option<u8>,
    pub urgency_label: String,
    pub urgency_color: String,
    pub expiry_label: String,
}

/// Input for registering a new batch
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchInput {
    #[validate(required(message = "Nama bahan wajib diisi."))]
    pub ingredient_name: Option<String>,
    #[validate(required(message = "Berat bahan wajib diisi."))]
    pub weight: Option<String>,
    #[validate(required(message = "Pilih satuan."))]
    pub unit: Option<String>,
    #[validate(required(message = "Pilih kategori bahan."))]
    pub category: Option<String>,
    #[validate(required(message = "Masukkan sumber bahan."))]
    pub source: Option<String>,
    #[validate(required(message = "Pilih lokasi penyimpanan."))]
    pub storage_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_urgency_round_trips_unknown_codes() {
        let level: UrgencyLevel = serde_json::from_str("\"SEVERE\"").unwrap();
        assert_eq!(level, UrgencyLevel::Unknown("SEVERE".to_string()));
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"SEVERE\"");
    }

    #[test]
    fn test_fifo_batch_from_backend_payload() {
        let json = r#"{
            "id": 12,
            "batchCode": "B-0012",
            "ingredientName": "Bayam",
            "weight": 4.5,
            "unit": "kg",
            "entryDate": "2024-05-01T08:00:00",
            "expiryDate": "2024-05-04T08:00:00",
            "daysUntilExpiry": 2,
            "urgencyLevel": "HIGH"
        }"#;
        let batch: FifoBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.urgency_level, UrgencyLevel::High);
        assert_eq!(batch.id, Some(RecordId::Number(12)));
        assert_eq!(batch.weight.to_string(), "4.5");
    }

    #[test]
    fn test_null_dates_do_not_fail_the_list() {
        let json = r#"[
            {"batchCode": "B-1", "ingredientName": "Bayam", "entryDate": "2024-05-01",
             "expiryDate": "2024-05-05", "urgencyLevel": "LOW"},
            {"batchCode": "B-2", "ingredientName": "Wortel", "entryDate": null,
             "urgencyLevel": "LOW"}
        ]"#;
        let batches: Vec<FifoBatch> = serde_json::from_str(json).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].entry_date, "2024-05-01");
        assert_eq!(batches[1].entry_date, "");
        assert_eq!(batches[1].expiry_date, "");

        let now = chrono::Utc.with_ymd_and_hms(2024, 5, 3, 0, 0, 0).unwrap();
        let progress: Vec<Option<u8>> = batches
            .into_iter()
            .map(|b| crate::fifo::recommend(b, now, crate::types::Language::Indonesian).progress)
            .collect();
        assert_eq!(progress, vec![Some(50), None]);

        let rows: Vec<Batch> =
            serde_json::from_str(r#"[{"batchCode": "B-3", "ingredientName": "Apel", "expiryDate": null}]"#)
                .unwrap();
        assert_eq!(rows[0].expiry_date, "");
    }

    #[test]
    fn test_batch_missing_active_is_inactive() {
        let json = r#"{
            "batchCode": "B-1",
            "ingredientName": "Tomat",
            "entryDate": "2024-05-01",
            "expiryDate": "2024-05-08",
            "freshnessStatus": "GREEN"
        }"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        assert!(!batch.active);
        assert_eq!(batch.freshness_status, Some(FreshnessStatus::Green));
    }

    #[test]
    fn test_category_codes() {
        assert_eq!(
            IngredientCategory::from_code("BAHAN_POKOK"),
            Some(IngredientCategory::BahanPokok)
        );
        assert_eq!(IngredientCategory::from_code("sayuran"), None);
        assert_eq!(IngredientCategory::Buah.as_str(), "BUAH");
    }
}
