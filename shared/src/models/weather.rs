//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Location used when none (or an unknown one) is selected
pub const DEFAULT_LOCATION: &str = "New Delhi";

/// Locations offered by the location selector
pub const KNOWN_LOCATIONS: &[&str] = &["New Delhi", "Mumbai", "Ahmedabad", "Modasa"];

/// Full weather state for one location, replaced wholesale on change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    pub current: CurrentConditions,
    /// Display order
    pub forecast: Vec<ForecastDay>,
    /// Display order
    pub alerts: Vec<WeatherAlert>,
}

/// Current weather metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temperature_celsius: Decimal,
    pub condition: String,
    pub humidity_percent: u8,
    pub rainfall_mm: Decimal,
    pub wind_speed_kmh: Decimal,
    pub icon: String,
}

impl CurrentConditions {
    pub fn temperature_display(&self) -> String {
        format!("{}°C", self.temperature_celsius.normalize())
    }

    pub fn humidity_display(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    pub fn rainfall_display(&self) -> String {
        format!("{}mm", self.rainfall_mm.normalize())
    }

    pub fn wind_speed_display(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh.normalize())
    }

    /// Metric slot values in display order: temperature, humidity, rainfall, wind speed
    pub fn metric_values(&self) -> [String; 4] {
        [
            self.temperature_display(),
            self.humidity_display(),
            self.rainfall_display(),
            self.wind_speed_display(),
        ]
    }
}

/// One day of the forecast strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub icon: String,
    pub high_celsius: Decimal,
    pub low_celsius: Decimal,
    pub rain_chance_percent: u8,
}

impl ForecastDay {
    fn new(day: &str, icon: &str, high: i64, low: i64, rain_chance_percent: u8) -> Self {
        Self {
            day: day.to_string(),
            icon: icon.to_string(),
            high_celsius: Decimal::from(high),
            low_celsius: Decimal::from(low),
            rain_chance_percent,
        }
    }

    pub fn high_display(&self) -> String {
        format!("{}°", self.high_celsius.normalize())
    }

    pub fn low_display(&self) -> String {
        format!("{}°", self.low_celsius.normalize())
    }

    pub fn rain_chance_display(&self) -> String {
        format!("{}%", self.rain_chance_percent)
    }
}

/// Weather alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub alert_type: String,
    pub description: String,
    pub severity: AlertSeverity,
}

/// Severity of a weather alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// Canonical spelling of a known location, or the default location
pub fn resolve_location(name: &str) -> &'static str {
    let name = name.trim();
    KNOWN_LOCATIONS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(DEFAULT_LOCATION)
}

impl WeatherSnapshot {
    /// Deterministic mock weather for a location
    pub fn mock(location: &str) -> Self {
        Self {
            location: resolve_location(location).to_string(),
            current: CurrentConditions {
                temperature_celsius: Decimal::from(28),
                condition: "Partly Cloudy".to_string(),
                humidity_percent: 65,
                rainfall_mm: Decimal::from(2),
                wind_speed_kmh: Decimal::from(12),
                icon: "fas fa-sun".to_string(),
            },
            forecast: vec![
                ForecastDay::new("Today", "fas fa-sun", 32, 22, 10),
                ForecastDay::new("Tomorrow", "fas fa-cloud-rain", 28, 20, 80),
                ForecastDay::new("Wed", "fas fa-cloud", 26, 18, 60),
                ForecastDay::new("Thu", "fas fa-sun", 30, 21, 20),
                ForecastDay::new("Fri", "fas fa-cloud-rain", 24, 16, 90),
            ],
            alerts: vec![
                WeatherAlert {
                    alert_type: "Heavy Rain".to_string(),
                    description:
                        "Heavy rainfall expected tomorrow. Take necessary precautions for crops."
                            .to_string(),
                    severity: AlertSeverity::High,
                },
                WeatherAlert {
                    alert_type: "High Wind".to_string(),
                    description:
                        "Strong winds expected in the afternoon. Secure loose structures."
                            .to_string(),
                    severity: AlertSeverity::Medium,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_values_order() {
        let snapshot = WeatherSnapshot::mock(DEFAULT_LOCATION);
        assert_eq!(
            snapshot.current.metric_values(),
            [
                "28°C".to_string(),
                "65%".to_string(),
                "2mm".to_string(),
                "12 km/h".to_string()
            ]
        );
    }

    #[test]
    fn test_resolve_location() {
        assert_eq!(resolve_location("mumbai"), "Mumbai");
        assert_eq!(resolve_location(" Ahmedabad "), "Ahmedabad");
        assert_eq!(resolve_location("Atlantis"), DEFAULT_LOCATION);
        assert_eq!(WeatherSnapshot::mock("").location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_forecast_display() {
        let snapshot = WeatherSnapshot::mock("Modasa");
        let tomorrow = &snapshot.forecast[1];
        assert_eq!(tomorrow.day, "Tomorrow");
        assert_eq!(tomorrow.high_display(), "28°");
        assert_eq!(tomorrow.low_display(), "20°");
        assert_eq!(tomorrow.rain_chance_display(), "80%");
        assert_eq!(snapshot.alerts[0].severity, AlertSeverity::High);
    }
}
