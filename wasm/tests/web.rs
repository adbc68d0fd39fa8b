//! Tests run inside a JavaScript engine with `wasm-pack test --node`

#![cfg(target_arch = "wasm32")]

use farm_assistant_wasm::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_time_label_against_js_clock() {
    let now = js_sys::Date::now();
    assert_eq!(message_time_label_now(now, "en"), "Just now");
    assert_eq!(message_time_label_now(now - 120_000.0, "hi"), "2 मिनट पहले");
}

#[wasm_bindgen_test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(translate("fr", "nav.home"), "Home");
    assert_eq!(toggle_language("fr"), "hi");
    assert!(resolve_translation("fr", "nav.home").is_none());
}

#[wasm_bindgen_test]
fn test_weather_snapshot_json() {
    let json: serde_json::Value = serde_json::from_str(&weather_snapshot("Mumbai").unwrap()).unwrap();
    assert_eq!(json["location"], "Mumbai");
}

#[wasm_bindgen_test]
fn test_invalid_crop_json_is_an_error() {
    assert!(validate_crop_form("{not json").is_err());
}
