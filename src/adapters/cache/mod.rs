//! In-memory caching layer for weather reports.
//!
//! Uses `moka` for bounded, TTL-based concurrent caching.

pub mod moka_weather_cache;

pub use moka_weather_cache::MokaWeatherCache;
