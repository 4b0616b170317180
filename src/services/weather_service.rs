//! Weather lookup service.
//!
//! Orchestrates cache lookup, the conditional upstream call and the cache
//! write for a single city.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::errors::{WeatherError, WeatherResult};
use crate::domain::models::{cache_key, WeatherReport};
use crate::domain::ports::{CredentialSource, WeatherCache, WeatherProvider};

/// Lifetime of a cached report.
pub const CACHE_TTL: Duration = Duration::from_millis(600_000);

pub struct WeatherService {
    cache: Arc<dyn WeatherCache>,
    provider: Arc<dyn WeatherProvider>,
    credentials: Arc<dyn CredentialSource>,
    ttl: Duration,
}

impl WeatherService {
    pub fn new(
        cache: Arc<dyn WeatherCache>,
        provider: Arc<dyn WeatherProvider>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self::with_ttl(cache, provider, credentials, CACHE_TTL)
    }

    /// Create with a custom per-write TTL.
    pub fn with_ttl(
        cache: Arc<dyn WeatherCache>,
        provider: Arc<dyn WeatherProvider>,
        credentials: Arc<dyn CredentialSource>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            provider,
            credentials,
            ttl,
        }
    }

    /// Get current weather for a city.
    ///
    /// A cached report is returned as-is without contacting upstream. On a
    /// miss the credential is read, upstream is called once, and the
    /// normalized report is cached before being returned.
    #[instrument(skip(self))]
    pub async fn get_weather(&self, city: &str) -> WeatherResult<WeatherReport> {
        let key = cache_key(city);

        if let Some(cached) = self.cache.get(&key).await {
            debug!(%key, "weather cache hit");
            return Ok(cached);
        }
        debug!(%key, "weather cache miss");

        let api_key = match self.credentials.api_key() {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                error!("upstream credential is not configured");
                return Err(WeatherError::Configuration(
                    "OPENWEATHER_API_KEY is not configured".to_string(),
                ));
            }
        };

        let report = self
            .provider
            .current_weather(city, &api_key)
            .await
            .inspect_err(|e| warn!(error = %e, "upstream weather lookup failed"))?;

        self.cache.set(&key, report.clone(), self.ttl).await;
        info!(%key, temp = report.temp, "cached fresh weather report");

        Ok(report)
    }
}
