//! Weather Gateway - cached current weather over HTTP
//!
//! Accepts a city name, returns normalized current-weather data from
//! OpenWeatherMap, and caches each city's report for ten minutes.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, typed errors and port traits
//! - **Service Layer** (`services`): The weather lookup orchestration
//! - **Adapters** (`adapters`): Moka cache, OpenWeather client, axum HTTP surface
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, credentials
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weather_gateway::adapters::{cache::MokaWeatherCache, openweather::OpenWeatherClient};
//! use weather_gateway::infrastructure::credentials::ConfigCredentials;
//! use weather_gateway::services::WeatherService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = WeatherService::new(
//!         Arc::new(MokaWeatherCache::new()),
//!         Arc::new(OpenWeatherClient::new()?),
//!         Arc::new(ConfigCredentials::new(Some("my-api-key".to_string()))),
//!     );
//!     let report = service.get_weather("Madrid").await?;
//!     println!("{} °C, {}", report.temp, report.description);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::MokaWeatherCache;
pub use adapters::http::WeatherHttpServer;
pub use adapters::openweather::{OpenWeatherClient, OpenWeatherError};
pub use domain::models::{cache_key, Config, WeatherQuery, WeatherReport};
pub use domain::ports::{CredentialSource, WeatherCache, WeatherProvider};
pub use domain::{WeatherError, WeatherResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::WeatherService;
