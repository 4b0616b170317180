//! Domain models for the weather gateway.

pub mod config;
pub mod weather;

pub use config::{CacheConfig, Config, LoggingConfig, ServerConfig, UpstreamConfig};
pub use weather::{cache_key, WeatherQuery, WeatherReport, CACHE_KEY_PREFIX};
