//! Weather HTTP Server.
//!
//! Exposes `GET /weather?city=<name>` over the weather service, plus a
//! `GET /health` liveness probe.

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::errors::WeatherError;
use crate::domain::models::{ServerConfig, WeatherQuery, WeatherReport};
use crate::services::WeatherService;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.message().to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Shared state for the weather HTTP server.
struct AppState {
    service: Arc<WeatherService>,
}

/// Weather HTTP Server.
pub struct WeatherHttpServer {
    config: ServerConfig,
    service: Arc<WeatherService>,
}

impl WeatherHttpServer {
    pub fn new(service: Arc<WeatherService>, config: ServerConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            service: Arc::clone(&self.service),
        });

        let app = Router::new()
            .route("/weather", get(get_weather))
            .route("/health", get(health_check))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    self.config.host, self.config.port
                )
            })
    }

    /// Start the server.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        tracing::info!("Weather HTTP server listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated unexpectedly")?;

        tracing::info!("Weather HTTP server stopped");
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<Json<WeatherReport>, WeatherError> {
    let Query(query) = query.map_err(|rejection| WeatherError::Validation(rejection.body_text()))?;
    query.validate()?;

    let report = state.service.get_weather(&query.city).await?;
    Ok(Json(report))
}
