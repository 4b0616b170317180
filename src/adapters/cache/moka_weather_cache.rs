//! Moka-backed weather cache with per-entry TTL.
//!
//! Entries carry the TTL they were written with; a moka `Expiry` policy
//! reads it back so each write controls its own lifetime. Capacity is
//! bounded and moka evicts beyond it.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::time::{Duration, Instant};

use crate::domain::models::{CacheConfig, WeatherReport};
use crate::domain::ports::WeatherCache;

/// Default TTL for cached weather reports.
const WEATHER_CACHE_TTL_MS: u64 = 600_000;

/// Maximum number of cached cities.
const WEATHER_CACHE_MAX_CAPACITY: u64 = 100;

#[derive(Debug, Clone)]
struct CachedReport {
    report: WeatherReport,
    ttl: Duration,
}

/// Expiry policy that honours the TTL stored alongside each entry.
struct PerEntryTtl;

impl Expiry<String, CachedReport> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedReport,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedReport,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Process-wide weather cache.
///
/// Constructed once at startup and shared by `Arc`.
pub struct MokaWeatherCache {
    entries: Cache<String, CachedReport>,
    default_ttl: Duration,
}

impl MokaWeatherCache {
    /// Create a cache with the default capacity and TTL.
    pub fn new() -> Self {
        Self::with_capacity(
            WEATHER_CACHE_MAX_CAPACITY,
            Duration::from_millis(WEATHER_CACHE_TTL_MS),
        )
    }

    /// Create a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_capacity(config.max_capacity, Duration::from_millis(config.ttl_ms))
    }

    /// Create with a custom capacity and default TTL.
    pub fn with_capacity(max_capacity: u64, default_ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            entries,
            default_ttl,
        }
    }

    /// TTL applied by [`insert`](Self::insert).
    pub const fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Store an entry with the default TTL.
    pub async fn insert(&self, key: &str, value: WeatherReport) {
        self.set(key, value, self.default_ttl).await;
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }

    /// Flush pending maintenance so counts and evictions are observable.
    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl Default for MokaWeatherCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherCache for MokaWeatherCache {
    async fn get(&self, key: &str) -> Option<WeatherReport> {
        self.entries.get(key).await.map(|cached| cached.report)
    }

    async fn set(&self, key: &str, value: WeatherReport, ttl: Duration) {
        self.entries
            .insert(key.to_string(), CachedReport { report: value, ttl })
            .await;
    }
}
