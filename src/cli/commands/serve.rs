//! `serve` command: wire the service together and run the HTTP server.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::load_config;
use crate::adapters::cache::MokaWeatherCache;
use crate::adapters::http::WeatherHttpServer;
use crate::adapters::openweather::OpenWeatherClient;
use crate::cli::ServeArgs;
use crate::infrastructure::credentials::ConfigCredentials;
use crate::infrastructure::logging::LoggerImpl;
use crate::services::WeatherService;

pub async fn execute(args: ServeArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let _logger = LoggerImpl::init(&config.logging)?;

    info!("Starting weather gateway");
    info!("Upstream endpoint: {}", config.upstream.base_url);
    info!(
        "Cache: max {} entries, ttl {} ms",
        config.cache.max_capacity, config.cache.ttl_ms
    );
    if config.upstream.api_key.as_deref().is_none_or(str::is_empty) {
        warn!("OPENWEATHER_API_KEY is not set; uncached lookups will fail with 500");
    }

    let cache = Arc::new(MokaWeatherCache::from_config(&config.cache));
    let provider = Arc::new(
        OpenWeatherClient::with_config(&config.upstream)
            .context("Failed to create OpenWeather client")?,
    );
    let credentials = Arc::new(ConfigCredentials::from_config(&config.upstream));

    let service = Arc::new(WeatherService::with_ttl(
        cache,
        provider,
        credentials,
        Duration::from_millis(config.cache.ttl_ms),
    ));

    WeatherHttpServer::new(service, config.server.clone())
        .serve_with_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
