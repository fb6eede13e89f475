pub mod client;
pub mod models;

pub use client::MindicadorClient;
pub use models::{ApiError, IndicatorObservation, IndicatorResponse};
