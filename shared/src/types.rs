//! Common types used across the platform

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }

    /// Parse a language code, falling back to Indonesian
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Language::English,
            _ => Language::Indonesian,
        }
    }
}

/// Identifier of a record owned by the inventory backend.
///
/// The backend is free to use numeric or textual keys, so both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

/// Deserialize a string field that the backend may send as `null` or omit.
///
/// Missing values become an empty string, which date parsing rejects per row.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Page envelope returned by the backend for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

/// Date range for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("42").unwrap();
        let s: RecordId = serde_json::from_str("\"b-7\"").unwrap();
        assert_eq!(n, RecordId::Number(42));
        assert_eq!(s.to_string(), "b-7");
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("fr"), Language::Indonesian);
        assert_eq!(Language::default().code(), "id");
    }

    #[test]
    fn test_page_response_without_content() {
        let page: PageResponse<RecordId> = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
    }
}
