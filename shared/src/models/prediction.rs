//! Crop prediction table

use serde::Serialize;

/// Predicted outcome for a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub crop: &'static str,
    #[serde(rename = "yield")]
    pub yield_estimate: &'static str,
    pub harvest_date: &'static str,
    /// 0-100
    pub health_score: u8,
    pub market_price: &'static str,
    /// 0-100
    pub confidence: u8,
}

impl Prediction {
    /// Slot values in display order: yield, harvest date, health score, market price
    pub fn display_values(&self) -> [String; 4] {
        [
            self.yield_estimate.to_string(),
            self.harvest_date.to_string(),
            format!("{}%", self.health_score),
            self.market_price.to_string(),
        ]
    }

    pub fn confidence_display(&self) -> String {
        format!("{}%", self.confidence)
    }
}

const WHEAT: Prediction = Prediction {
    crop: "wheat",
    yield_estimate: "45 quintals/acre",
    harvest_date: "15 April 2024",
    health_score: 85,
    market_price: "₹2,200/quintal",
    confidence: 92,
};

const RICE: Prediction = Prediction {
    crop: "rice",
    yield_estimate: "38 quintals/acre",
    harvest_date: "25 October 2024",
    health_score: 78,
    market_price: "₹1,800/quintal",
    confidence: 88,
};

const CORN: Prediction = Prediction {
    crop: "corn",
    yield_estimate: "52 quintals/acre",
    harvest_date: "10 September 2024",
    health_score: 82,
    market_price: "₹1,500/quintal",
    confidence: 90,
};

/// Crop selected when the predictions tab is opened
pub const DEFAULT_PREDICTION_CROP: &str = "wheat";

/// Look up the prediction for a crop type; unknown crops get the wheat entry
pub fn predict(crop_type: &str) -> Prediction {
    match crop_type {
        "rice" => RICE,
        "corn" => CORN,
        _ => WHEAT,
    }
}
