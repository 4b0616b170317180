//! Domain errors for the weather gateway.

use thiserror::Error;

/// Errors surfaced by a weather lookup.
///
/// Every variant is terminal for the request that produced it. The HTTP
/// adapter maps each one to a client-facing status via [`WeatherError::status_code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// Client input was malformed (missing or empty city, unknown parameter).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The upstream provider rejected the configured credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The upstream provider does not recognize the requested city.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The upstream provider is degraded, rate limited, or unreachable.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The service itself is misconfigured.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type WeatherResult<T> = Result<T, WeatherError>;

impl WeatherError {
    /// HTTP status code reported to the caller.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::UpstreamUnavailable(_) => 502,
            Self::Configuration(_) => 500,
        }
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::UpstreamUnavailable(msg)
            | Self::Configuration(msg) => msg,
        }
    }
}
