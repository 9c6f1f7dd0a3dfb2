//! Freshness status presentation and spoilage alerts

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fifo::calculate_progress_str;
use crate::models::{Batch, FreshnessStatus, FreshnessStatusSummary};
use crate::types::RecordId;

/// Text color of a freshness status
pub fn status_color(status: &FreshnessStatus) -> &'static str {
    match status {
        FreshnessStatus::Red => "text-red-500",
        FreshnessStatus::Yellow => "text-yellow-500",
        FreshnessStatus::Green => "text-green-500",
        _ => "text-gray-500",
    }
}

/// Spoilage risk as shown to kitchen staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Kritis,
    Waspada,
    Aman,
}

impl AlertStatus {
    pub fn from_freshness(status: Option<&FreshnessStatus>) -> Self {
        match status {
            Some(FreshnessStatus::Red) => AlertStatus::Kritis,
            Some(FreshnessStatus::Yellow) => AlertStatus::Waspada,
            _ => AlertStatus::Aman,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Kritis => "Kritis",
            AlertStatus::Waspada => "Waspada",
            AlertStatus::Aman => "Aman",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AlertStatus::Kritis => "Perlu tindakan segera",
            AlertStatus::Waspada => "Pantau dalam 48 jam",
            AlertStatus::Aman => "Tidak perlu tindakan",
        }
    }

    pub fn progress_color(&self) -> &'static str {
        match self {
            AlertStatus::Kritis => "bg-red-500",
            AlertStatus::Waspada => "bg-yellow-500",
            AlertStatus::Aman => "bg-green-500",
        }
    }
}

/// One row of the spoilage alert table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoilageAlert {
    pub id: Option<RecordId>,
    pub batch_code: String,
    pub ingredient_name: String,
    pub expiry_date: String,
    /// Elapsed shelf life, used as the spoilage confidence bar
    pub spoilage_confidence: Option<u8>,
    pub main_factor: String,
    pub status: AlertStatus,
    pub description: String,
    pub progress_color: String,
}

/// Status selector of the spoilage alert table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Critical,
    Warning,
}

impl AlertFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("critical") => AlertFilter::Critical,
            Some("warning") => AlertFilter::Warning,
            _ => AlertFilter::All,
        }
    }

    fn accepts(&self, status: AlertStatus) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Critical => status == AlertStatus::Kritis,
            AlertFilter::Warning => status == AlertStatus::Waspada,
        }
    }
}

/// Turn inventory batches into spoilage alert rows
pub fn spoilage_alerts(batches: &[Batch], filter: AlertFilter, now: DateTime<Utc>) -> Vec<SpoilageAlert> {
    batches
        .iter()
        .map(|batch| {
            let status = AlertStatus::from_freshness(batch.freshness_status.as_ref());
            SpoilageAlert {
                id: batch.id.clone(),
                batch_code: batch.batch_code.clone(),
                ingredient_name: batch.ingredient_name.clone(),
                expiry_date: batch.expiry_date.clone(),
                spoilage_confidence: calculate_progress_str(&batch.entry_date, &batch.expiry_date, now),
                main_factor: "-".to_string(),
                status,
                description: status.description().to_string(),
                progress_color: status.progress_color().to_string(),
            }
        })
        .filter(|alert| filter.accepts(alert.status))
        .collect()
}

fn summary_rank(status: &FreshnessStatus) -> u8 {
    match status {
        FreshnessStatus::Green => 0,
        FreshnessStatus::Yellow => 1,
        FreshnessStatus::Red => 2,
        _ => 3,
    }
}

/// Order the freshness summary GREEN, YELLOW, RED and attach chart colors
pub fn order_freshness_summary(mut summaries: Vec<FreshnessStatusSummary>) -> Vec<FreshnessStatusSummary> {
    summaries.sort_by(|a, b| match summary_rank(&a.status).cmp(&summary_rank(&b.status)) {
        Ordering::Equal => a.status.as_str().cmp(b.status.as_str()),
        other => other,
    });
    for summary in &mut summaries {
        summary.fill_color = Some(status_color(&summary.status).to_string());
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn batch(code: &str, status: Option<FreshnessStatus>) -> Batch {
        Batch {
            id: Some(RecordId::from(code)),
            batch_code: code.to_string(),
            ingredient_name: "Tomat".to_string(),
            category: None,
            weight: Default::default(),
            unit: None,
            entry_date: "2024-05-01".to_string(),
            expiry_date: "2024-05-11".to_string(),
            storage_location: None,
            source: None,
            notes: None,
            freshness_status: status,
            active: true,
        }
    }

    #[test]
    fn test_alert_status_mapping() {
        assert_eq!(AlertStatus::from_freshness(Some(&FreshnessStatus::Red)), AlertStatus::Kritis);
        assert_eq!(AlertStatus::from_freshness(Some(&FreshnessStatus::Yellow)), AlertStatus::Waspada);
        assert_eq!(AlertStatus::from_freshness(Some(&FreshnessStatus::Expired)), AlertStatus::Aman);
        assert_eq!(AlertStatus::from_freshness(None), AlertStatus::Aman);
        assert_eq!(AlertStatus::Waspada.description(), "Pantau dalam 48 jam");
    }

    #[test]
    fn test_spoilage_alerts_filtering() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap();
        let batches = vec![
            batch("A", Some(FreshnessStatus::Red)),
            batch("B", Some(FreshnessStatus::Yellow)),
            batch("C", Some(FreshnessStatus::Green)),
        ];

        let all = spoilage_alerts(&batches, AlertFilter::All, now);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].spoilage_confidence, Some(50));
        assert_eq!(all[0].progress_color, "bg-red-500");

        let critical = spoilage_alerts(&batches, AlertFilter::parse(Some("critical")), now);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].batch_code, "A");

        let warning = spoilage_alerts(&batches, AlertFilter::parse(Some("warning")), now);
        assert_eq!(warning.len(), 1);
        assert_eq!(warning[0].batch_code, "B");
    }

    #[test]
    fn test_freshness_summary_order() {
        let summaries = vec![
            FreshnessStatusSummary { status: FreshnessStatus::Red, count: 2, fill_color: None },
            FreshnessStatusSummary { status: FreshnessStatus::Green, count: 7, fill_color: None },
            FreshnessStatusSummary { status: FreshnessStatus::Yellow, count: 3, fill_color: None },
        ];
        let ordered = order_freshness_summary(summaries);
        let statuses: Vec<&str> = ordered.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(statuses, vec!["GREEN", "YELLOW", "RED"]);
        assert_eq!(ordered[0].fill_color.as_deref(), Some("text-green-500"));
    }
}
