use serde::{Deserialize, Serialize};

/// Main configuration structure for the weather gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Inbound HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream weather provider configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inbound HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_true(),
        }
    }
}

/// Upstream weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    /// Current-weather endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider credential; checked per request, not at startup
    #[serde(default)]
    pub api_key: Option<String>,

    /// Unit system sent to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum redirects followed per request
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout_ms() -> u64 {
    5000
}

const fn default_max_redirects() -> usize {
    5
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            units: default_units(),
            timeout_ms: default_timeout_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum number of cached cities
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,

    /// Entry lifetime in milliseconds
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

const fn default_max_capacity() -> u64 {
    100
}

const fn default_ttl_ms() -> u64 {
    600_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stdout only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
