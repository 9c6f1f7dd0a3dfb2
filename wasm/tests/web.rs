//! Browser tests for the exported helpers

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use kitchen_inventory_wasm::{calculate_progress, calculate_progress_at, map_urgency_to_label};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn progress_is_nan_for_malformed_dates() {
    assert!(calculate_progress("bukan tanggal", "2024-05-05").is_nan());
    assert!(calculate_progress("2024-05-01", "").is_nan());
}

#[wasm_bindgen_test]
fn progress_uses_browser_clock() {
    // Expired long ago, relative to any real clock
    assert_eq!(calculate_progress("2020-01-01", "2020-01-02"), 100.0);
    assert_eq!(calculate_progress_at("2024-05-01", "2024-05-05", 1_714_694_400_000.0), 50.0);
}

#[wasm_bindgen_test]
fn urgency_label_export() {
    assert_eq!(map_urgency_to_label("HIGH"), "Tinggi");
}
