//! Inventory listing and spoilage alert tests
//!
//! Tests for the inventory table including:
//! - Category and search filtering
//! - Newest-first ordering
//! - Spoilage alert status filtering

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use shared::format::parse_timestamp;
use shared::freshness::{spoilage_alerts, AlertFilter, AlertStatus};
use shared::inventory::InventoryQuery;
use shared::models::{Batch, FreshnessStatus};

fn batch(code: &str, name: &str, category: &str, entry: &str, status: FreshnessStatus) -> Batch {
    Batch {
        id: None,
        batch_code: code.to_string(),
        ingredient_name: name.to_string(),
        category: Some(category.to_string()),
        weight: Default::default(),
        unit: Some("kg".to_string()),
        entry_date: entry.to_string(),
        expiry_date: "2024-06-30".to_string(),
        storage_location: None,
        source: None,
        notes: None,
        freshness_status: Some(status),
        active: true,
    }
}

fn sample() -> Vec<Batch> {
    vec![
        batch("SAY-01", "Bayam", "SAYURAN", "2024-05-01", FreshnessStatus::Red),
        batch("BUA-01", "Jeruk", "BUAH", "2024-05-04", FreshnessStatus::Green),
        batch("PRO-01", "Ayam", "PROTEIN", "2024-05-02", FreshnessStatus::Yellow),
        batch("BUA-02", "Mangga", "BUAH", "2024-05-03", FreshnessStatus::Expired),
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn codes(batches: &[Batch]) -> Vec<&str> {
        batches.iter().map(|b| b.batch_code.as_str()).collect()
    }

    #[test]
    fn test_all_categories_sorted_newest_first() {
        let query = InventoryQuery::default();
        let result = query.apply(sample());
        assert_eq!(codes(&result), vec!["BUA-01", "BUA-02", "PRO-01", "SAY-01"]);
    }

    #[test]
    fn test_category_filter() {
        let query = InventoryQuery {
            category: Some("BUAH".to_string()),
            search: None,
        };
        assert_eq!(codes(&query.apply(sample())), vec!["BUA-01", "BUA-02"]);
    }

    #[test]
    fn test_unrecognized_category_matches_nothing() {
        let query = InventoryQuery {
            category: Some("MINUMAN".to_string()),
            search: None,
        };
        assert!(query.apply(sample()).is_empty());
    }

    #[test]
    fn test_search_matches_code_or_name() {
        let by_name = InventoryQuery {
            category: None,
            search: Some("MANG".to_string()),
        };
        assert_eq!(codes(&by_name.apply(sample())), vec!["BUA-02"]);

        let by_code = InventoryQuery {
            category: Some("all".to_string()),
            search: Some("pro-".to_string()),
        };
        assert_eq!(codes(&by_code.apply(sample())), vec!["PRO-01"]);
    }

    #[test]
    fn test_spoilage_alert_filters() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();

        let all = spoilage_alerts(&sample(), AlertFilter::All, now);
        assert_eq!(all.len(), 4);

        let critical = spoilage_alerts(&sample(), AlertFilter::parse(Some("critical")), now);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].status, AlertStatus::Kritis);
        assert_eq!(critical[0].description, "Perlu tindakan segera");

        let warning = spoilage_alerts(&sample(), AlertFilter::parse(Some("warning")), now);
        assert_eq!(warning.len(), 1);
        assert_eq!(warning[0].batch_code, "PRO-01");
    }

    #[test]
    fn test_expired_batch_is_not_an_alert() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let alerts = spoilage_alerts(&sample(), AlertFilter::All, now);
        let expired = alerts.iter().find(|a| a.batch_code == "BUA-02").unwrap();
        assert_eq!(expired.status, AlertStatus::Aman);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn batch_strategy() -> impl Strategy<Value = Batch> {
    (
        "[A-Z]{3}-[0-9]{2}",
        "[a-zA-Z]{3,10}",
        prop::sample::select(vec!["SAYURAN", "BUAH", "PROTEIN", "BAHAN_POKOK"]),
        1u32..=28,
    )
        .prop_map(|(code, name, category, day)| {
            batch(
                &code,
                &name,
                category,
                &format!("2024-05-{:02}", day),
                FreshnessStatus::Green,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Filtering never invents rows and keeps the entry order descending
    #[test]
    fn prop_filter_subset_and_sorted(
        batches in prop::collection::vec(batch_strategy(), 0..20),
        search in "[a-z]{0,2}",
    ) {
        let query = InventoryQuery { category: None, search: Some(search.clone()) };
        let result = query.apply(batches.clone());

        prop_assert!(result.len() <= batches.len());
        for row in &result {
            prop_assert!(
                row.batch_code.to_lowercase().contains(&search)
                    || row.ingredient_name.to_lowercase().contains(&search)
            );
        }
        for pair in result.windows(2) {
            let a = parse_timestamp(&pair[0].entry_date).unwrap();
            let b = parse_timestamp(&pair[1].entry_date).unwrap();
            prop_assert!(a >= b);
        }
    }

    /// An empty search with every category returns all rows
    #[test]
    fn prop_empty_query_keeps_everything(batches in prop::collection::vec(batch_strategy(), 0..20)) {
        let result = InventoryQuery::default().apply(batches.clone());
        prop_assert_eq!(result.len(), batches.len());
    }
}
