//! Domain layer for the weather gateway
//!
//! Models, typed errors and the port traits the service is written against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{WeatherError, WeatherResult};
