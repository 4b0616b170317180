//! Upstream weather provider port.

use async_trait::async_trait;

use crate::domain::errors::WeatherResult;
use crate::domain::models::WeatherReport;

/// Source of current weather for a city.
///
/// Implementations perform exactly one upstream request per call and map
/// upstream failures onto [`WeatherError`](crate::domain::errors::WeatherError).
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch and normalize current weather for `city` using `api_key`.
    async fn current_weather(&self, city: &str, api_key: &str) -> WeatherResult<WeatherReport>;
}
