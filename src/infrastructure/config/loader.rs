use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::credentials::API_KEY_ENV_VAR;

/// Default project config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "weather.yaml";

/// Dotenv file exported into the environment before loading.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid cache max_capacity: {0}. Must be at least 1")]
    InvalidCacheCapacity(u64),

    #[error("Invalid cache ttl_ms: {0}. Must be positive")]
    InvalidCacheTtl(u64),

    #[error("Invalid upstream timeout_ms: {0}. Must be positive")]
    InvalidTimeout(u64),

    #[error("Invalid upstream base_url: {0:?}. Must be an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("Upstream units cannot be empty")]
    EmptyUnits,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. weather.yaml in the working directory (optional)
    /// 3. Environment variables (WEATHER_* prefix, `__` for nesting)
    /// 4. `PORT` and `OPENWEATHER_API_KEY`
    ///
    /// Variables from `.env` in the working directory are exported first,
    /// so `OPENWEATHER_API_KEY` may live there.
    pub fn load() -> Result<Config> {
        Self::load_env_file(DEFAULT_ENV_FILE)?;
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    /// Export variables from a dotenv file into the process environment.
    ///
    /// Variables that are already set keep their value. Returns `false`
    /// when the file does not exist.
    pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => Ok(true),
            Err(e) if e.not_found() => {
                tracing::debug!("No env file loaded from {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e).context(format!("Failed to read env file {}", path.display())),
        }
    }

    /// Load configuration using a specific YAML file in place of weather.yaml
    ///
    /// A missing file is not an error; environment overrides still apply.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let mut config: Config = Self::figment(path).extract().context(format!(
            "Failed to load config from {}",
            path.display()
        ))?;

        // Read verbatim so an all-digit key is not coerced into a number.
        if let Ok(api_key) = std::env::var(API_KEY_ENV_VAR) {
            config.upstream.api_key = Some(api_key);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("WEATHER_").split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    /// Validate configuration after loading
    ///
    /// A missing credential is not a startup error: it is reported per
    /// request, so the service can come up before the key is provisioned.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if config.cache.max_capacity == 0 {
            return Err(ConfigError::InvalidCacheCapacity(config.cache.max_capacity));
        }

        if config.cache.ttl_ms == 0 {
            return Err(ConfigError::InvalidCacheTtl(config.cache.ttl_ms));
        }

        if config.upstream.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(config.upstream.timeout_ms));
        }

        let base_url = &config.upstream.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.clone()));
        }

        if config.upstream.units.trim().is_empty() {
            return Err(ConfigError::EmptyUnits);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
