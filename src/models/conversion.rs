//! Conversion submission models

use crate::models::currency::CurrencySpec;
use std::path::PathBuf;

/// A validated submission: a positive CLP amount and a supported currency.
/// Built fresh on every submit, never persisted.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount_clp: f64,
    pub currency: &'static CurrencySpec,
}

/// Result struct for one conversion cycle
#[derive(Debug)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub display_code: &'static str,
    /// Amount formatted with the es-CL currency convention
    pub formatted: String,
}

/// Everything a completed submission produces
#[derive(Debug)]
pub struct ConversionOutcome {
    pub request: ConversionRequest,
    pub result: ConversionResult,
    /// Newest rate used for the conversion, in CLP per unit
    pub rate: f64,
    /// Rendered history chart, absent when the series was too short
    pub chart_path: Option<PathBuf>,
}
