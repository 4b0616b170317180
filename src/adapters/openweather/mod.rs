//! OpenWeatherMap upstream adapter.

pub mod client;
pub mod error;
pub mod models;

pub use client::OpenWeatherClient;
pub use error::OpenWeatherError;
