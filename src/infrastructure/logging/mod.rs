//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stdout formatting
//! - Optional daily rolling JSON file output
//! - Secret scrubbing for upstream credentials

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LogFormat, LoggerImpl};
pub use secret_scrubbing::{scrub_secrets, SecretScrubber};
