//! OpenWeatherMap HTTP client.
//!
//! One GET per lookup against the current-weather endpoint. No retries:
//! every failure is classified and handed back to the caller.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client as ReqwestClient};
use std::time::Duration;
use tracing::{debug, warn};

use super::error::OpenWeatherError;
use super::models::CurrentWeatherResponse;
use crate::domain::errors::WeatherResult;
use crate::domain::models::{UpstreamConfig, WeatherReport};
use crate::domain::ports::WeatherProvider;

/// HTTP client for the OpenWeatherMap current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    /// Reusable HTTP client with connection pooling
    http: ReqwestClient,

    /// Current-weather endpoint
    base_url: String,

    /// Unit system query parameter
    units: String,
}

impl OpenWeatherClient {
    /// Create a client against the public endpoint with default settings
    /// (5000 ms timeout, 5 redirects, metric units).
    pub fn new() -> Result<Self> {
        Self::with_config(&UpstreamConfig::default())
    }

    /// Create a client from upstream configuration.
    pub fn with_config(config: &UpstreamConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            units: config.units.clone(),
        })
    }

    /// Endpoint this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, city: &str, api_key: &str) -> Result<WeatherReport, OpenWeatherError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", self.units.as_str())])
            .send()
            .await
            // The request URL carries the credential.
            .map_err(|e| OpenWeatherError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "OpenWeather returned error status");
            // Classification follows the status even when the body is unreadable.
            let body = response.text().await.unwrap_or_default();
            return Err(OpenWeatherError::from_status(status, &body, city));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OpenWeatherError::Network(e.without_url().to_string()))?;

        let parsed: CurrentWeatherResponse = serde_json::from_str(&body)
            .map_err(|e| OpenWeatherError::MalformedResponse(e.to_string()))?;

        WeatherReport::try_from(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str, api_key: &str) -> WeatherResult<WeatherReport> {
        self.fetch(city, api_key).await.map_err(|e| {
            warn!(error = %e, city, "OpenWeather request failed");
            e.into()
        })
    }
}
