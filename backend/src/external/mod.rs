//! External API integrations

pub mod inventory_api;
pub mod prediction;

pub use inventory_api::InventoryApiClient;
pub use prediction::PredictionClient;

use crate::error::AppError;

/// Pull a human-readable message out of an upstream error body
pub(crate) fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "error", "detail"]
                .iter()
                .find_map(|key| json.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Decode a JSON body, treating an empty body as `null`
pub(crate) fn decode_body<T: serde::de::DeserializeOwned>(bytes: &[u8], service: &str) -> Result<T, AppError> {
    let result = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|e| AppError::ExternalService(format!("Failed to parse {} response: {}", service, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefers_json_fields() {
        assert_eq!(upstream_message(r#"{"message":"Batch not found"}"#), "Batch not found");
        assert_eq!(upstream_message(r#"{"detail":"bad date"}"#), "bad date");
        assert_eq!(upstream_message(" plain text "), "plain text");
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let value: serde_json::Value = decode_body(b"", "test").unwrap();
        assert!(value.is_null());
        let unit: Option<u8> = decode_body(b"  ", "test").unwrap();
        assert!(unit.is_none());
        assert!(decode_body::<Vec<u8>>(b"", "test").is_err());
    }
}
