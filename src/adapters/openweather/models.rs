//! OpenWeatherMap current-weather response models.
//!
//! Only the fields the gateway normalizes are modeled; everything else in
//! the provider payload is ignored.

use serde::Deserialize;

use super::error::OpenWeatherError;
use crate::domain::models::WeatherReport;

/// Body of a successful `GET /data/2.5/weather` call.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// The `main` block.
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

/// One entry of the `weather` list.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

impl TryFrom<CurrentWeatherResponse> for WeatherReport {
    type Error = OpenWeatherError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let condition = response.weather.into_iter().next().ok_or_else(|| {
            OpenWeatherError::MalformedResponse("weather list is empty".to_string())
        })?;

        Ok(Self {
            temp: response.main.temp,
            feels_like: response.main.feels_like,
            humidity: response.main.humidity,
            description: condition.description,
        })
    }
}
