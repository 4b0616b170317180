//! Weather cache port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::models::WeatherReport;

/// Process-wide key/value store for normalized weather reports.
///
/// Implementations own eviction: entries expire after the TTL given at
/// write time, and a capacity bound may evict earlier.
#[async_trait]
pub trait WeatherCache: Send + Sync {
    /// Get a live entry by key.
    async fn get(&self, key: &str) -> Option<WeatherReport>;

    /// Store an entry, replacing any previous value for the key.
    async fn set(&self, key: &str, value: WeatherReport, ttl: Duration);
}
