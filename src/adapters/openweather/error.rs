use thiserror::Error;

use crate::domain::errors::WeatherError;
use crate::infrastructure::logging::secret_scrubbing::scrub_secrets;

/// Fallback when an error response carries no usable message.
const DEFAULT_UPSTREAM_MESSAGE: &str = "failed to fetch weather data";

/// Errors that can occur when calling the OpenWeatherMap API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenWeatherError {
    /// The API key was rejected (401)
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The city is unknown to the provider (404)
    #[error("City \"{0}\" not found")]
    CityNotFound(String),

    /// Request quota exhausted (429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// A success response did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl OpenWeatherError {
    /// Create error from HTTP status code and response body
    ///
    /// - 401: Invalid API key
    /// - 404: City not found
    /// - 429: Rate limited
    /// - Other: status with the body's `message` field when present
    pub fn from_status(status: reqwest::StatusCode, body: &str, city: &str) -> Self {
        match status.as_u16() {
            401 => Self::InvalidApiKey,
            404 => Self::CityNotFound(city.to_string()),
            429 => Self::RateLimited,
            code => Self::Status {
                status: code,
                message: extract_message(body),
            },
        }
    }
}

/// Pull the `message` field out of an error body, scrubbing credentials.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
                .map(scrub_secrets)
        })
        .unwrap_or_else(|| DEFAULT_UPSTREAM_MESSAGE.to_string())
}

impl From<OpenWeatherError> for WeatherError {
    fn from(err: OpenWeatherError) -> Self {
        match err {
            OpenWeatherError::InvalidApiKey => Self::Unauthorized(
                "Invalid API key. Check OPENWEATHER_API_KEY".to_string(),
            ),
            OpenWeatherError::CityNotFound(city) => Self::NotFound(format!(
                "City \"{city}\" not found. Check the city name"
            )),
            OpenWeatherError::RateLimited => Self::UpstreamUnavailable(
                "Request limit exceeded. Try again later".to_string(),
            ),
            OpenWeatherError::Status { message, .. } => Self::UpstreamUnavailable(format!(
                "Error querying OpenWeather API: {message}"
            )),
            OpenWeatherError::Network(_) => Self::UpstreamUnavailable(
                "Could not connect to the weather service. Try again later".to_string(),
            ),
            OpenWeatherError::MalformedResponse(detail) => Self::UpstreamUnavailable(format!(
                "Unexpected response from OpenWeather API: {detail}"
            )),
        }
    }
}
