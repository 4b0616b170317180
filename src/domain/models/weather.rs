//! Weather query and report models.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{WeatherError, WeatherResult};

/// Namespace prefix for weather cache keys.
pub const CACHE_KEY_PREFIX: &str = "weather:";

/// Build the cache key for a city.
///
/// Keys are case-insensitive on the city name, so `Madrid` and `MADRID`
/// share one entry.
pub fn cache_key(city: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{}", city.to_lowercase())
}

/// Inbound query for `GET /weather`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Validate the query, rejecting an empty or blank city.
    pub fn validate(&self) -> WeatherResult<()> {
        if self.city.trim().is_empty() {
            return Err(WeatherError::Validation(
                "city must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalized current-weather data for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius.
    pub temp: f64,
    /// Perceived temperature in degrees Celsius.
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Short condition description, e.g. "clear sky".
    pub description: String,
}
