//! Port trait definitions (Hexagonal Architecture)
//!
//! Interfaces the weather service depends on:
//! - WeatherCache: TTL cache of normalized reports
//! - WeatherProvider: upstream current-weather API
//! - CredentialSource: upstream API credential
//!
//! Adapters in `crate::adapters` and `crate::infrastructure` implement them.

pub mod credential_source;
pub mod weather_cache;
pub mod weather_provider;

pub use credential_source::CredentialSource;
pub use weather_cache::WeatherCache;
pub use weather_provider::WeatherProvider;
