//! External API integrations

pub mod weather;

pub use weather::{current_weather_url, parse_current_response, WeatherReport};
