//! OpenWeatherMap response mapping
//!
//! Only the shape of the current-weather endpoint is handled here. Nothing in
//! the application performs the request; callers that do can feed the body to
//! [`parse_current_response`].

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use shared::{CurrentConditions, WeatherSnapshot};

use crate::error::{AppError, AppResult};

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// URL of the current-weather endpoint for a city, in metric units.
/// City and key are percent-encoded.
pub fn current_weather_url(city: &str, api_key: &str) -> String {
    format!(
        "{}/weather?q={}&appid={}&units=metric",
        OPENWEATHER_BASE_URL,
        urlencoding::encode(city),
        urlencoding::encode(api_key)
    )
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    name: Option<String>,
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: Option<OWMWind>,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: i32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

/// Current conditions as reported by OpenWeatherMap
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub condition: String,
    pub icon: String,
    pub temperature_celsius: Decimal,
    pub temp_max_celsius: Decimal,
    pub temp_min_celsius: Decimal,
    pub pressure_hpa: i32,
    pub humidity_percent: u8,
    pub wind_speed_mps: Decimal,
    pub rain_1h_mm: Option<Decimal>,
}

fn decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

fn rounded(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a current-weather response body
pub fn parse_current_response(body: &str) -> AppResult<WeatherReport> {
    let data: OWMCurrentResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;
    Ok(WeatherReport::from(data))
}

impl From<OWMCurrentResponse> for WeatherReport {
    fn from(data: OWMCurrentResponse) -> Self {
        let weather = data.weather.first();
        Self {
            location: data.name.unwrap_or_default(),
            condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
            icon: weather.and_then(|w| w.icon.clone()).unwrap_or_default(),
            temperature_celsius: decimal(data.main.temp),
            temp_max_celsius: decimal(data.main.temp_max),
            temp_min_celsius: decimal(data.main.temp_min),
            pressure_hpa: data.main.pressure,
            humidity_percent: data.main.humidity,
            wind_speed_mps: data.wind.map(|w| decimal(w.speed)).unwrap_or_default(),
            rain_1h_mm: data.rain.and_then(|r| r.one_hour).map(decimal),
        }
    }
}

impl WeatherReport {
    /// Temperature headline, e.g. `H:34° L:26°`
    pub fn high_low_display(&self) -> String {
        format!(
            "H:{}° L:{}°",
            rounded(self.temp_max_celsius),
            rounded(self.temp_min_celsius)
        )
    }

    pub fn pressure_display(&self) -> String {
        format!("{} mb", self.pressure_hpa)
    }

    /// Current conditions with the temperature rounded for display
    /// and wind converted to km/h
    pub fn current_conditions(&self) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: rounded(self.temperature_celsius),
            condition: self.condition.clone(),
            humidity_percent: self.humidity_percent,
            rainfall_mm: self.rain_1h_mm.unwrap_or_default().normalize(),
            wind_speed_kmh: rounded(self.wind_speed_mps * Decimal::new(36, 1)),
            icon: self.icon.clone(),
        }
    }

    /// Snapshot with live current conditions. Forecast and alerts are kept
    /// from `base` since this endpoint carries neither.
    pub fn into_snapshot(self, base: WeatherSnapshot) -> WeatherSnapshot {
        let current = self.current_conditions();
        let location = if self.location.is_empty() {
            base.location
        } else {
            self.location
        };
        WeatherSnapshot {
            location,
            current,
            forecast: base.forecast,
            alerts: base.alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const SAMPLE: &str = r#"{
        "coord": {"lon": 72.58, "lat": 23.02},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 31.46, "feels_like": 36.2, "temp_min": 29.5, "temp_max": 33.6,
                 "pressure": 1004, "humidity": 71},
        "wind": {"speed": 5.0, "deg": 240},
        "rain": {"1h": 0.8},
        "name": "Ahmedabad"
    }"#;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_url_template() {
        assert_eq!(
            current_weather_url("Ahmedabad", "KEY"),
            "https://api.openweathermap.org/data/2.5/weather?q=Ahmedabad&appid=KEY&units=metric"
        );
    }

    #[test]
    fn test_url_encodes_query_values() {
        let url = current_weather_url("New Delhi", "a&b=c");
        assert!(url.contains("?q=New%20Delhi&"));
        assert!(url.contains("&appid=a%26b%3Dc&"));
        assert!(url.ends_with("&units=metric"));

        let url = current_weather_url("Mumbai&units=imperial", "KEY");
        assert!(url.contains("q=Mumbai%26units%3Dimperial&"));
        assert_eq!(url.matches("units=").count(), 1);
    }

    #[test]
    fn test_parse_sample_response() {
        let report = parse_current_response(SAMPLE).unwrap();
        assert_eq!(report.location, "Ahmedabad");
        assert_eq!(report.condition, "Rain");
        assert_eq!(report.pressure_display(), "1004 mb");
        assert_eq!(report.high_low_display(), "H:34° L:30°");
        assert_eq!(report.rain_1h_mm, Some(dec("0.8")));
    }

    #[test]
    fn test_current_conditions_rounded() {
        let current = parse_current_response(SAMPLE).unwrap().current_conditions();
        assert_eq!(current.temperature_display(), "31°C");
        assert_eq!(current.humidity_display(), "71%");
        assert_eq!(current.wind_speed_display(), "18 km/h");
        assert_eq!(current.rainfall_display(), "0.8mm");
    }

    #[test]
    fn test_missing_optional_sections() {
        let body = r#"{"weather": [], "main": {"temp": 20.0, "temp_min": 18.0,
            "temp_max": 22.0, "pressure": 1012, "humidity": 40}}"#;
        let report = parse_current_response(body).unwrap();
        assert_eq!(report.condition, "");
        assert_eq!(report.rain_1h_mm, None);

        let snapshot = report.into_snapshot(WeatherSnapshot::mock("Modasa"));
        assert_eq!(snapshot.location, "Modasa");
        assert_eq!(snapshot.current.rainfall_display(), "0mm");
        assert_eq!(snapshot.forecast.len(), 5);
    }

    #[test]
    fn test_malformed_body_is_error() {
        assert!(matches!(
            parse_current_response("not json"),
            Err(AppError::Internal(_))
        ));
    }
}
