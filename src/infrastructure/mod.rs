//! Infrastructure layer module
//!
//! Process-level concerns around the service:
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod logging;
