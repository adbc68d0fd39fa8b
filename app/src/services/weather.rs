//! Weather and prediction presenter

use shared::{predict, Prediction, WeatherSnapshot, DEFAULT_PREDICTION_CROP};

use crate::render::{
    fill_slots, RenderTarget, CONFIDENCE_FILL_ID, CONFIDENCE_TEXT_ID, METRIC_VALUE_CLASS,
    PREDICTION_VALUE_CLASS, TEMPERATURE_CLASS,
};

/// Holds the live weather snapshot and the crop selected for predictions
#[derive(Debug, Clone)]
pub struct WeatherPresenter {
    snapshot: WeatherSnapshot,
    selected_crop: String,
}

impl WeatherPresenter {
    pub fn new(location: &str) -> Self {
        Self {
            snapshot: WeatherSnapshot::mock(location),
            selected_crop: DEFAULT_PREDICTION_CROP.to_string(),
        }
    }

    pub fn snapshot(&self) -> &WeatherSnapshot {
        &self.snapshot
    }

    /// Replace the snapshot with mock data for `location`
    pub fn load_snapshot(&mut self, location: &str) -> &WeatherSnapshot {
        self.replace_snapshot(WeatherSnapshot::mock(location))
    }

    /// Replace the snapshot wholesale
    pub fn replace_snapshot(&mut self, snapshot: WeatherSnapshot) -> &WeatherSnapshot {
        tracing::info!("Weather snapshot replaced for {}", snapshot.location);
        self.snapshot = snapshot;
        &self.snapshot
    }

    pub fn selected_crop(&self) -> &str {
        &self.selected_crop
    }

    pub fn select_crop(&mut self, crop_type: &str) {
        self.selected_crop = crop_type.to_string();
    }

    /// Prediction for the selected crop
    pub fn prediction(&self) -> Prediction {
        predict(&self.selected_crop)
    }

    /// Write current metrics into the metric slots (temperature, humidity,
    /// rainfall, wind speed) and refresh Celsius temperature read-outs
    pub fn project(&self, target: &mut dyn RenderTarget) -> bool {
        let current = &self.snapshot.current;
        let temperature = current.temperature_display();

        for index in 0..target.slot_count(TEMPERATURE_CLASS) {
            let shows_celsius = target
                .slot_text(TEMPERATURE_CLASS, index)
                .map(|text| text.contains("°C"))
                .unwrap_or(false);
            if shows_celsius {
                target.set_slot_text(TEMPERATURE_CLASS, index, &temperature);
            }
        }

        fill_slots(target, METRIC_VALUE_CLASS, &current.metric_values())
    }

    /// Write prediction values (yield, harvest date, health score, market
    /// price) and the confidence meter. Skipped while there are no crops.
    pub fn project_predictions(&self, target: &mut dyn RenderTarget, has_crops: bool) -> bool {
        if !has_crops {
            tracing::debug!("No crop data, predictions not shown");
            return false;
        }

        let prediction = self.prediction();
        let filled = fill_slots(target, PREDICTION_VALUE_CLASS, &prediction.display_values());
        target.set_width_percent(CONFIDENCE_FILL_ID, prediction.confidence);
        target.set_text(CONFIDENCE_TEXT_ID, &prediction.confidence_display());
        filled
    }
}
