//! Inbound HTTP adapter.

pub mod weather_http;

pub use weather_http::{ErrorResponse, WeatherHttpServer};
