//! Inventory table filtering and ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::format::parse_timestamp;
use crate::models::{Batch, IngredientCategory};

/// Category selection of the inventory table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(IngredientCategory),
    /// A category the table does not know; matches nothing
    Unrecognized,
}

impl CategoryFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(code) => IngredientCategory::from_code(code)
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::Unrecognized),
        }
    }

    pub fn matches(&self, batch: &Batch) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => batch.category.as_deref() == Some(category.as_str()),
            CategoryFilter::Unrecognized => false,
        }
    }
}

/// Query parameters of the inventory listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl InventoryQuery {
    /// Apply the filter and return batches newest entry first
    pub fn apply(&self, batches: Vec<Batch>) -> Vec<Batch> {
        let category = CategoryFilter::parse(self.category.as_deref());
        let needle = self
            .search
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        let mut filtered: Vec<Batch> = batches
            .into_iter()
            .filter(|batch| category.matches(batch) && matches_search(batch, &needle))
            .collect();

        sort_newest_first(&mut filtered);
        filtered
    }
}

fn matches_search(batch: &Batch, needle: &str) -> bool {
    needle.is_empty()
        || batch.batch_code.to_lowercase().contains(needle)
        || batch.ingredient_name.to_lowercase().contains(needle)
}

/// Sort by entry date, most recent first. Unparseable dates go last.
pub fn sort_newest_first(batches: &mut [Batch]) {
    batches.sort_by(|a, b| {
        match (parse_timestamp(&a.entry_date), parse_timestamp(&b.entry_date)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(code: &str, name: &str, category: &str, entry: &str) -> Batch {
        Batch {
            id: None,
            batch_code: code.to_string(),
            ingredient_name: name.to_string(),
            category: Some(category.to_string()),
            weight: Default::default(),
            unit: Some("kg".to_string()),
            entry_date: entry.to_string(),
            expiry_date: "2024-06-01".to_string(),
            storage_location: None,
            source: None,
            notes: None,
            freshness_status: None,
            active: true,
        }
    }

    fn sample() -> Vec<Batch> {
        vec![
            batch("SAY-001", "Bayam", "SAYURAN", "2024-05-01"),
            batch("BUA-001", "Jeruk", "BUAH", "2024-05-03"),
            batch("PRO-001", "Telur", "PROTEIN", "2024-05-02"),
            batch("SAY-002", "Wortel", "SAYURAN", "rusak"),
        ]
    }

    fn codes(batches: &[Batch]) -> Vec<&str> {
        batches.iter().map(|b| b.batch_code.as_str()).collect()
    }

    #[test]
    fn test_all_sorted_newest_first() {
        let result = InventoryQuery::default().apply(sample());
        assert_eq!(codes(&result), vec!["BUA-001", "PRO-001", "SAY-001", "SAY-002"]);
    }

    #[test]
    fn test_category_filter() {
        let query = InventoryQuery {
            category: Some("SAYURAN".into()),
            search: None,
        };
        assert_eq!(codes(&query.apply(sample())), vec!["SAY-001", "SAY-002"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let query = InventoryQuery {
            category: Some("BUMBU".into()),
            search: None,
        };
        assert!(query.apply(sample()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_code_and_name() {
        let query = InventoryQuery {
            category: None,
            search: Some("tELur".into()),
        };
        assert_eq!(codes(&query.apply(sample())), vec!["PRO-001"]);

        let query = InventoryQuery {
            category: Some("all".into()),
            search: Some("say-".into()),
        };
        assert_eq!(codes(&query.apply(sample())), vec!["SAY-001", "SAY-002"]);
    }
}
