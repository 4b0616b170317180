//! Common test utilities for integration tests
//!
//! Provides shared fixtures, stub collaborators and helpers used across
//! multiple integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use weather_gateway::domain::models::UpstreamConfig;
use weather_gateway::{
    CredentialSource, MokaWeatherCache, OpenWeatherClient, WeatherProvider, WeatherReport,
    WeatherResult, WeatherService,
};

/// Path the mock upstream serves current weather on.
pub const WEATHER_PATH: &str = "/data/2.5/weather";

/// Credential used against mock servers.
pub const TEST_API_KEY: &str = "test-api-key";

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Upstream body for Madrid as OpenWeatherMap returns it.
pub fn madrid_body() -> String {
    serde_json::json!({
        "coord": {"lon": -3.7026, "lat": 40.4165},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 20.5, "feels_like": 19.8, "humidity": 65, "pressure": 1018},
        "name": "Madrid",
        "cod": 200
    })
    .to_string()
}

/// The normalized Madrid report.
pub fn madrid_report() -> WeatherReport {
    WeatherReport {
        temp: 20.5,
        feels_like: 19.8,
        humidity: 65,
        description: "clear sky".to_string(),
    }
}

/// Upstream config pointing at a mock server.
pub fn upstream_config(server_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: format!("{server_url}{WEATHER_PATH}"),
        ..Default::default()
    }
}

/// Client pointing at a mock server.
pub fn client_for(server_url: &str) -> OpenWeatherClient {
    OpenWeatherClient::with_config(&upstream_config(server_url)).expect("Failed to create client")
}

/// A URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Serve a single connection with a fixed raw HTTP response, then close it.
///
/// Returns the base URL of the listener.
pub async fn raw_upstream(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// Accept connections and never answer them.
pub async fn stalled_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    format!("http://{addr}")
}

/// Fixed credential source.
pub struct StaticKey(pub Option<String>);

impl StaticKey {
    pub fn some() -> Arc<Self> {
        Arc::new(Self(Some(TEST_API_KEY.to_string())))
    }

    pub fn none() -> Arc<Self> {
        Arc::new(Self(None))
    }
}

impl CredentialSource for StaticKey {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Provider returning a canned result and counting calls.
pub struct StubProvider {
    result: WeatherResult<WeatherReport>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn returning(result: WeatherResult<WeatherReport>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_weather(&self, _city: &str, _api_key: &str) -> WeatherResult<WeatherReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Service over a fresh moka cache and the given collaborators.
pub fn service_with(
    cache: Arc<MokaWeatherCache>,
    provider: Arc<dyn WeatherProvider>,
    credentials: Arc<dyn CredentialSource>,
) -> Arc<WeatherService> {
    Arc::new(WeatherService::new(cache, provider, credentials))
}
