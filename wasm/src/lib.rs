//! WebAssembly module for the Farm Assistant
//!
//! Provides client-side logic for the browser page:
//! - Dictionary lookups and language toggling
//! - Chat keyword classification and canned replies
//! - Crop form validation
//! - Yield predictions and mock weather data

use chrono::DateTime;
use serde::Serialize;
use shared::translations;
use shared::{classify, respond};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn language(code: &str) -> Language {
    Language::from_code(code).unwrap_or_default()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    for from in Language::ALL {
        let to = from.toggled();
        for key in translations::missing_keys(from, to) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Translation key {} missing for {}",
                key, to
            )));
        }
    }
}

/// Translate a dotted key, falling back to the key itself
#[wasm_bindgen]
pub fn translate(language_code: &str, key: &str) -> String {
    translations::translate(language(language_code), key)
}

/// Resolve a dotted key; `undefined` when the code or key is unknown
#[wasm_bindgen]
pub fn resolve_translation(language_code: &str, key: &str) -> Option<String> {
    Language::from_code(language_code)
        .and_then(|lang| translations::resolve(lang, key))
        .map(str::to_string)
}

/// Suggestion chips as a JSON array
#[wasm_bindgen]
pub fn chat_suggestions(language_code: &str) -> Result<String, JsValue> {
    let suggestions =
        translations::resolve_list(language(language_code), "chat.suggestions").unwrap_or_default();
    to_json(&suggestions)
}

/// Code of the language the toggle switches to
#[wasm_bindgen]
pub fn toggle_language(language_code: &str) -> String {
    language(language_code).toggled().code().to_string()
}

#[wasm_bindgen]
pub fn document_title(language_code: &str) -> String {
    translations::document_title(language(language_code))
}

/// Topic a chat message is answered with (snake_case)
#[wasm_bindgen]
pub fn classify_message(text: &str) -> Result<String, JsValue> {
    let topic = classify(text);
    serde_json::to_value(topic)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| JsValue::from_str("Unnamed topic"))
}

/// Canned reply for a chat message
#[wasm_bindgen]
pub fn chat_reply(text: &str, language_code: &str) -> String {
    respond(text, language(language_code)).to_string()
}

/// Prediction for a crop type as JSON
#[wasm_bindgen]
pub fn predict_crop(crop_type: &str) -> Result<String, JsValue> {
    to_json(&predict(crop_type))
}

/// Mock weather snapshot for a location as JSON
#[wasm_bindgen]
pub fn weather_snapshot(location: &str) -> Result<String, JsValue> {
    to_json(&WeatherSnapshot::mock(location))
}

/// Validate crop form JSON. Returns the translation keys of missing
/// required fields as a JSON array (empty when the form is complete).
#[wasm_bindgen]
pub fn validate_crop_form(input_json: &str) -> Result<String, JsValue> {
    let input: CropInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop JSON: {}", e)))?;

    let missing: Vec<&str> = match validate_crop_input(&input) {
        Ok(()) => Vec::new(),
        Err(e) => e.missing.iter().map(RequiredField::label_key).collect(),
    };
    to_json(&missing)
}

/// Tab reached by keyboard navigation; `undefined` at either end
#[wasm_bindgen]
pub fn adjacent_tab(current: &str, forward: bool) -> Option<String> {
    let index = DEFAULT_TABS.iter().position(|t| *t == current)?;
    let target = if forward {
        index.checked_add(1)?
    } else {
        index.checked_sub(1)?
    };
    DEFAULT_TABS.get(target).map(|t| t.to_string())
}

/// Relative time label for a message, both times in epoch milliseconds
#[wasm_bindgen]
pub fn message_time_label(timestamp_ms: f64, now_ms: f64, language_code: &str) -> String {
    let (Some(timestamp), Some(now)) = (
        DateTime::from_timestamp_millis(timestamp_ms as i64),
        DateTime::from_timestamp_millis(now_ms as i64),
    ) else {
        return String::new();
    };
    format_message_time(timestamp, now, language(language_code))
}

/// Relative time label measured against the browser clock
#[wasm_bindgen]
pub fn message_time_label_now(timestamp_ms: f64, language_code: &str) -> String {
    message_time_label(timestamp_ms, js_sys::Date::now(), language_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_falls_back() {
        assert_eq!(translate("en", "nav.home"), "Home");
        assert_eq!(translate("hi", "nav.home"), "होम");
        assert_eq!(translate("en", "no.such.key"), "no.such.key");
        assert_eq!(resolve_translation("fr", "nav.home"), None);
    }

    #[test]
    fn test_toggle_language() {
        assert_eq!(toggle_language("en"), "hi");
        assert_eq!(toggle_language("hi"), "en");
    }

    #[test]
    fn test_classify_message() {
        assert_eq!(classify_message("Best fertilizer for wheat?").unwrap(), "wheat");
        assert_eq!(classify_message("pest problem").unwrap(), "pest_control");
        assert_eq!(classify_message("???").unwrap(), "general");
    }

    #[test]
    fn test_validate_crop_form() {
        let complete = r#"{"cropType":"wheat","plantingDate":"2024-11-01","fieldSize":"2"}"#;
        assert_eq!(validate_crop_form(complete).unwrap(), "[]");

        let partial = r#"{"cropType":"wheat"}"#;
        let missing: Vec<String> = serde_json::from_str(&validate_crop_form(partial).unwrap()).unwrap();
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_adjacent_tab() {
        assert_eq!(adjacent_tab("home", true).as_deref(), Some("crop"));
        assert_eq!(adjacent_tab("home", false), None);
        assert_eq!(adjacent_tab("chat", true), None);
        assert_eq!(adjacent_tab("nowhere", true), None);
    }

    #[test]
    fn test_predict_crop_json() {
        let json: serde_json::Value = serde_json::from_str(&predict_crop("corn").unwrap()).unwrap();
        assert_eq!(json["yield"], "52 quintals/acre");
        assert_eq!(json["confidence"], 90);
    }

    #[test]
    fn test_message_time_label() {
        let now = 1_718_000_000_000.0;
        assert_eq!(message_time_label(now - 5_000.0, now, "en"), "Just now");
        assert_eq!(message_time_label(now - 300_000.0, now, "hi"), "5 मिनट पहले");
    }
}
