//! English and Hindi UI dictionaries
//!
//! Entries are addressed by dotted keys (`crop.cropAdded`) that descend one
//! nesting level per segment.

use std::sync::OnceLock;

use serde_json::{json, Value};

use crate::types::Language;

/// Suffix appended to `app.title` for the document title
pub const TITLE_SUFFIX: &str = " - Farmer's Digital Companion";

/// Dictionary for a language
pub fn dictionary(language: Language) -> &'static Value {
    static EN: OnceLock<Value> = OnceLock::new();
    static HI: OnceLock<Value> = OnceLock::new();
    match language {
        Language::English => EN.get_or_init(english),
        Language::Hindi => HI.get_or_init(hindi),
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, segment| node.get(segment))
}

/// Resolve a dotted key to a string. Missing segments and non-string nodes resolve to `None`.
pub fn resolve(language: Language, key: &str) -> Option<&'static str> {
    lookup(dictionary(language), key).and_then(Value::as_str)
}

/// Resolve a dotted key, falling back to the key itself
pub fn translate(language: Language, key: &str) -> String {
    resolve(language, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Resolve a dotted key that holds a list of strings
pub fn resolve_list(language: Language, key: &str) -> Option<Vec<&'static str>> {
    lookup(dictionary(language), key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
}

/// Document title for a language
pub fn document_title(language: Language) -> String {
    format!("{}{}", translate(language, "app.title"), TITLE_SUFFIX)
}

/// Every dotted key that ends at a string or list
pub fn leaf_keys(language: Language) -> Vec<String> {
    fn walk(node: &Value, prefix: &str, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (segment, child) in map {
                    let key = if prefix.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}.{}", prefix, segment)
                    };
                    walk(child, &key, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    let mut keys = Vec::new();
    walk(dictionary(language), "", &mut keys);
    keys
}

/// Keys present in `from` that `to` cannot resolve
pub fn missing_keys(from: Language, to: Language) -> Vec<String> {
    leaf_keys(from)
        .into_iter()
        .filter(|key| lookup(dictionary(to), key).is_none())
        .collect()
}

fn english() -> Value {
    json!({
        "app": {
            "title": "Agricultural Assistant"
        },
        "nav": {
            "home": "Home",
            "crop": "Crop Data",
            "weather": "Weather",
            "predictions": "Predictions",
            "chat": "Chat Assistant"
        },
        "common": {
            "welcome": "Welcome, Farmer",
            "loading": "Loading...",
            "success": "Success!",
            "error": "Error",
            "clear": "Clear",
            "submit": "Submit",
            "language": "Language"
        },
        "home": {
            "welcome": "Welcome, Farmer",
            "subtitle": "Your digital farming companion",
            "quickActions": "Quick Actions",
            "addCrop": "Add Crop Data",
            "checkWeather": "Check Weather",
            "viewPredictions": "View Predictions",
            "askQuestion": "Ask Assistant",
            "todayWeather": "Today's Weather",
            "recentActivity": "Recent Activity"
        },
        "crop": {
            "title": "Crop Information",
            "subtitle": "Enter your crop details",
            "cropType": "Crop Type",
            "selectCrop": "Select Crop Type",
            "plantingDate": "Planting Date",
            "fieldSize": "Field Size (acres)",
            "soilType": "Soil Type",
            "selectSoil": "Select Soil Type",
            "irrigationType": "Irrigation Type",
            "selectIrrigation": "Select Irrigation Type",
            "fertilizer": "Fertilizer Used",
            "pesticide": "Pesticide Used",
            "expectedHarvest": "Expected Harvest Date",
            "notes": "Additional Notes",
            "addCrop": "Add Crop",
            "cropAdded": "Crop data added successfully!"
        },
        "weather": {
            "title": "Weather Information",
            "currentWeather": "Current Weather",
            "temperature": "Temperature",
            "humidity": "Humidity",
            "rainfall": "Rainfall",
            "windSpeed": "Wind Speed",
            "forecast": "7-Day Forecast",
            "alerts": "Weather Alerts",
            "location": "Location",
            "updateLocation": "Update Location"
        },
        "predictions": {
            "title": "Crop Predictions",
            "selectedCrop": "Selected Crop",
            "yieldPrediction": "Yield Prediction",
            "harvestTime": "Optimal Harvest Time",
            "riskAnalysis": "Risk Analysis",
            "recommendations": "Recommendations",
            "cropHealth": "Crop Health",
            "marketPrice": "Market Price Forecast",
            "noPredictions": "No predictions available. Please add crop data first."
        },
        "chat": {
            "title": "Chat Assistant",
            "placeholder": "Ask me about farming, crops, weather...",
            "send": "Send",
            "thinking": "Assistant is thinking...",
            "welcome": "Hello! I am your farming assistant. How can I help you today?",
            "suggestions": [
                "How to improve crop yield?",
                "Best time to plant wheat?",
                "Organic fertilizer tips",
                "Pest control methods"
            ]
        }
    })
}

fn hindi() -> Value {
    json!({
        "app": {
            "title": "कृषि सहायक"
        },
        "nav": {
            "home": "होम",
            "crop": "फसल डेटा",
            "weather": "मौसम",
            "predictions": "भविष्यवाणी",
            "chat": "चैट सहायक"
        },
        "common": {
            "welcome": "स्वागत है, किसान जी",
            "loading": "लोड हो रहा है...",
            "success": "सफल!",
            "error": "त्रुटि",
            "clear": "साफ करें",
            "submit": "जमा करें",
            "language": "भाषा"
        },
        "home": {
            "welcome": "स्वागत है, किसान जी",
            "subtitle": "आपका डिजिटल खेती साथी",
            "quickActions": "त्वरित कार्य",
            "addCrop": "फसल डेटा जोड़ें",
            "checkWeather": "मौसम देखें",
            "viewPredictions": "भविष्यवाणी देखें",
            "askQuestion": "सहायक से पूछें",
            "todayWeather": "आज का मौसम",
            "recentActivity": "हाल की गतिविधि"
        },
        "crop": {
            "title": "फसल की जानकारी",
            "subtitle": "अपनी फसल का विवरण दर्ज करें",
            "cropType": "फसल का प्रकार",
            "selectCrop": "फसल का प्रकार चुनें",
            "plantingDate": "बोने की तारीख",
            "fieldSize": "खेत का आकार (एकड़)",
            "soilType": "मिट्टी का प्रकार",
            "selectSoil": "मिट्टी का प्रकार चुनें",
            "irrigationType": "सिंचाई का प्रकार",
            "selectIrrigation": "सिंचाई का प्रकार चुनें",
            "fertilizer": "उपयोग की गई खाद",
            "pesticide": "उपयोग की गई कीटनाशक",
            "expectedHarvest": "अपेक्षित फसल की तारीख",
            "notes": "अतिरिक्त टिप्पणी",
            "addCrop": "फसल जोड़ें",
            "cropAdded": "फसल डेटा सफलतापूर्वक जोड़ा गया!"
        },
        "weather": {
            "title": "मौसम की जानकारी",
            "currentWeather": "वर्तमान मौसम",
            "temperature": "तापमान",
            "humidity": "नमी",
            "rainfall": "बारिश",
            "windSpeed": "हवा की गति",
            "forecast": "7-दिन का पूर्वानुमान",
            "alerts": "मौसम चेतावनी",
            "location": "स्थान",
            "updateLocation": "स्थान अपडेट करें"
        },
        "predictions": {
            "title": "फसल भविष्यवाणी",
            "selectedCrop": "चयनित फसल",
            "yieldPrediction": "उपज की भविष्यवाणी",
            "harvestTime": "इष्टतम फसल का समय",
            "riskAnalysis": "जोखिम विश्लेषण",
            "recommendations": "सुझाव",
            "cropHealth": "फसल की सेहत",
            "marketPrice": "बाजार मूल्य पूर्वानुमान",
            "noPredictions": "कोई भविष्यवाणी उपलब्ध नहीं। कृपया पहले फसल डेटा जोड़ें।"
        },
        "chat": {
            "title": "चैट सहायक",
            "placeholder": "खेती, फसल, मौसम के बारे में पूछें...",
            "send": "भेजें",
            "thinking": "सहायक सोच रहा है...",
            "welcome": "नमस्ते! मैं आपका कृषि सहायक हूँ। आज मैं आपकी कैसे मदद कर सकता हूँ?",
            "suggestions": [
                "फसल की पैदावार कैसे बढ़ाएं?",
                "गेहूं बोने का सबसे अच्छा समय?",
                "जैविक खाद के टिप्स",
                "कीट नियंत्रण के तरीके"
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_crop_added() {
        assert_eq!(
            resolve(Language::English, "crop.cropAdded"),
            Some("Crop data added successfully!")
        );
        assert_eq!(
            resolve(Language::Hindi, "crop.cropAdded"),
            Some("फसल डेटा सफलतापूर्वक जोड़ा गया!")
        );
    }

    #[test]
    fn test_missing_key_resolves_to_none() {
        assert_eq!(resolve(Language::English, "nonexistent.key"), None);
        assert_eq!(resolve(Language::English, "crop.cropAdded.extra"), None);
        assert_eq!(resolve(Language::English, ""), None);
        assert_eq!(translate(Language::Hindi, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn test_section_node_is_not_a_string() {
        assert_eq!(resolve(Language::English, "crop"), None);
        assert_eq!(resolve(Language::English, "chat.suggestions"), None);
    }

    #[test]
    fn test_resolve_list() {
        let suggestions = resolve_list(Language::English, "chat.suggestions").unwrap();
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[1], "Best time to plant wheat?");
        assert!(resolve_list(Language::Hindi, "chat.title").is_none());
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title(Language::English),
            "Agricultural Assistant - Farmer's Digital Companion"
        );
        assert_eq!(document_title(Language::Hindi), "कृषि सहायक - Farmer's Digital Companion");
    }

    #[test]
    fn test_dictionaries_are_complete() {
        assert!(missing_keys(Language::English, Language::Hindi).is_empty());
        assert!(missing_keys(Language::Hindi, Language::English).is_empty());
        assert!(leaf_keys(Language::English).contains(&"crop.cropAdded".to_string()));
    }
}
