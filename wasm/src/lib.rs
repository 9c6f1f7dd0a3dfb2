//! WebAssembly module for the Kitchen Inventory platform
//!
//! Provides client-side computation for:
//! - FIFO expiry progress and urgency badges
//! - Freshness and notification labels
//! - Inventory table filtering
//! - Forecast date windows

use chrono::{DateTime, NaiveDate, Utc};
use wasm_bindgen::prelude::*;

use shared::fifo;
use shared::format::{format_date, format_date_to_string, parse_timestamp};
use shared::freshness::{status_color, AlertStatus};
use shared::inventory::InventoryQuery;
use shared::models::{Batch, FreshnessStatus};
use shared::types::Language;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("kitchen inventory helpers loaded"));
}

fn datetime_from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
}

/// Elapsed shelf life in percent at the given instant (epoch millis).
/// Returns NaN when a date cannot be parsed.
#[wasm_bindgen(js_name = calculateProgressAt)]
pub fn calculate_progress_at(entry_date: &str, expiry_date: &str, now_ms: f64) -> f64 {
    datetime_from_millis(now_ms)
        .and_then(|now| fifo::calculate_progress_str(entry_date, expiry_date, now))
        .map(f64::from)
        .unwrap_or(f64::NAN)
}

/// Elapsed shelf life in percent right now
#[wasm_bindgen(js_name = calculateProgress)]
pub fn calculate_progress(entry_date: &str, expiry_date: &str) -> f64 {
    calculate_progress_at(entry_date, expiry_date, js_sys::Date::now())
}

#[wasm_bindgen(js_name = mapUrgencyToLabel)]
pub fn map_urgency_to_label(urgency_level: &str) -> String {
    fifo::map_urgency_to_label(urgency_level).to_string()
}

#[wasm_bindgen(js_name = mapUrgencyToColor)]
pub fn map_urgency_to_color(urgency_level: &str) -> String {
    fifo::map_urgency_to_color(urgency_level).to_string()
}

#[wasm_bindgen(js_name = expiryLabel)]
pub fn expiry_label(days_until_expiry: i32, language: &str) -> String {
    fifo::expiry_label(i64::from(days_until_expiry), Language::from_code(language))
}

#[wasm_bindgen(js_name = freshnessColor)]
pub fn freshness_color(status: &str) -> String {
    status_color(&FreshnessStatus::from_code(status)).to_string()
}

/// Alert status name ("Kritis", "Waspada", "Aman") for a freshness code
#[wasm_bindgen(js_name = alertStatus)]
pub fn alert_status(status: &str) -> String {
    let status = FreshnessStatus::from_code(status);
    AlertStatus::from_freshness(Some(&status)).as_str().to_string()
}

/// Relative notification age; "-" for an unparseable timestamp
#[wasm_bindgen(js_name = formatTimeAgo)]
pub fn format_time_ago(created_at: &str, now_ms: f64) -> String {
    match (parse_timestamp(created_at), datetime_from_millis(now_ms)) {
        (Some(created), Some(now)) => shared::notification::format_time_ago(created, now),
        _ => "-".to_string(),
    }
}

/// Filter and sort an inventory list given as JSON
#[wasm_bindgen(js_name = filterInventory)]
pub fn filter_inventory(items_json: &str, category: &str, search: &str) -> Result<String, JsValue> {
    let items: Vec<Batch> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inventory JSON: {}", e)))?;

    let query = InventoryQuery {
        category: Some(category.to_string()),
        search: Some(search.to_string()),
    };

    serde_json::to_string(&query.apply(items))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize inventory: {}", e)))
}

/// "dd Month yyyy"; the input is returned unchanged when it is not a date
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_display(value: &str) -> String {
    format_date(value).unwrap_or_else(|| value.to_string())
}

/// Initial forecast selection as `[start, end]` in yyyy-MM-dd
#[wasm_bindgen(js_name = defaultDateRange)]
pub fn default_date_range(today: &str) -> Result<Vec<JsValue>, JsValue> {
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|_| JsValue::from_str("Tanggal tidak valid"))?;
    let range = shared::forecast::default_selection(today);
    Ok(vec![
        JsValue::from_str(&format_date_to_string(range.start)),
        JsValue::from_str(&format_date_to_string(range.end)),
    ])
}

/// Forecast window as JSON; empty strings select the defaults
#[wasm_bindgen(js_name = forecastDateRange)]
pub fn forecast_date_range(from: &str, to: &str, today: &str) -> Result<String, JsValue> {
    let parse = |value: &str| -> Result<Option<NaiveDate>, JsValue> {
        if value.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| JsValue::from_str("Tanggal tidak valid"))
    };

    let today = parse(today)?.ok_or_else(|| JsValue::from_str("Tanggal tidak valid"))?;
    let range = shared::forecast::forecast_date_range(parse(from)?, parse(to)?, today);

    Ok(serde_json::json!({
        "from": format_date_to_string(range.from),
        "to": format_date_to_string(range.to),
        "lastFrom": format_date_to_string(range.last_from),
        "lastTo": format_date_to_string(range.last_to),
    })
    .to_string())
}
