//! Notification panel tests
//!
//! Tests for shaping backend notifications including:
//! - Priority and category mapping
//! - Relative time formatting
//! - Order preservation

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use shared::models::{NotificationApiItem, NotificationCategory, NotificationType};
use shared::notification::{format_time_ago, map_priority_to_type, transform_notifications};
use shared::types::RecordId;

fn item(id: i64, priority: &str, created_at: &str, reference_type: Option<&str>) -> NotificationApiItem {
    NotificationApiItem {
        id: RecordId::from(id),
        priority: priority.to_string(),
        title: format!("Notifikasi {}", id),
        message: "Batch mendekati kadaluarsa".to_string(),
        created_at: created_at.to_string(),
        reference_id: Some(RecordId::from(100 + id)),
        read: false,
        reference_type: reference_type.map(str::to_string),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_transform_fields() {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let items = vec![
            item(1, "HIGH", "2024-05-03T11:55:00Z", Some("BATCH")),
            item(2, "low", "2024-05-01T12:00:00Z", None),
            item(3, "MEDIUM", "bukan tanggal", Some("USER")),
        ];

        let out = transform_notifications(items, now);
        assert_eq!(out.len(), 3);

        assert_eq!(out[0].kind, NotificationType::Critical);
        assert_eq!(out[0].category, NotificationCategory::Inventory);
        assert_eq!(out[0].timestamp, "5 menit yang lalu");
        assert_eq!(out[0].badge_variant, "destructive");
        assert_eq!(out[0].category_label, "Inventaris");
        assert_eq!(out[0].batch_id, Some(RecordId::from(101)));

        assert_eq!(out[1].kind, NotificationType::Info);
        assert_eq!(out[1].category, NotificationCategory::System);
        assert_eq!(out[1].timestamp, "2 hari yang lalu");

        assert_eq!(out[2].kind, NotificationType::Warning);
        assert_eq!(out[2].timestamp, "-");
        assert!(out[2].date.is_none());
    }

    #[test]
    fn test_time_ago_boundaries() {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(now, now), "0 menit yang lalu");
        assert_eq!(format_time_ago(now - Duration::minutes(59), now), "59 menit yang lalu");
        assert_eq!(format_time_ago(now - Duration::minutes(60), now), "1 jam yang lalu");
        assert_eq!(format_time_ago(now - Duration::hours(23), now), "23 jam yang lalu");
        assert_eq!(format_time_ago(now - Duration::hours(24), now), "1 hari yang lalu");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Priority mapping ignores case
    #[test]
    fn prop_priority_case_insensitive(priority in prop::sample::select(vec!["high", "medium", "low"])) {
        prop_assert_eq!(
            map_priority_to_type(priority),
            map_priority_to_type(&priority.to_uppercase())
        );
    }

    /// Transformation keeps backend order and ids
    #[test]
    fn prop_transform_preserves_order(ids in prop::collection::vec(0i64..10_000, 0..30)) {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let items: Vec<_> = ids
            .iter()
            .map(|id| item(*id, "MEDIUM", "2024-05-03T10:00:00Z", Some("BATCH")))
            .collect();

        let out = transform_notifications(items, now);
        let out_ids: Vec<RecordId> = out.into_iter().map(|n| n.id).collect();
        let expected: Vec<RecordId> = ids.into_iter().map(RecordId::from).collect();
        prop_assert_eq!(out_ids, expected);
    }

    /// Past timestamps always read as an age in a single unit
    #[test]
    fn prop_time_ago_has_unit(minutes in 0i64..200_000) {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let label = format_time_ago(now - Duration::minutes(minutes), now);
        prop_assert!(label.ends_with("yang lalu"));
        let expected_unit = if minutes < 60 { "menit" } else if minutes < 24 * 60 { "jam" } else { "hari" };
        prop_assert!(label.contains(expected_unit));
    }
}
