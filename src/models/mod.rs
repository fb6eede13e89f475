//! Data models for conversion commands and services
//!
//! This module organizes the data transfer structs used across commands.
//! Each model represents the input/output of a service operation.

pub mod chart;
pub mod conversion;
pub mod currency;

// Re-export commonly used types for convenience
pub use chart::RatePoint;
pub use conversion::{ConversionOutcome, ConversionRequest, ConversionResult};
pub use currency::{find_currency, supported_currencies, CurrencySpec};
