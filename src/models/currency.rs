//! Supported currency registry.
//!
//! The converter speaks mindicador.cl indicator codes. Each supported code
//! maps to the ISO code, locale and symbol used for output formatting, so an
//! unknown code is a defined error instead of being silently labeled in euros.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Display and formatting metadata for one supported indicator code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySpec {
    /// Code used in the mindicador.cl URL ("dolar", "euro")
    pub api_code: &'static str,
    /// ISO 4217 code shown to the user
    pub display_code: &'static str,
    /// Locale convention applied to numbers and dates
    pub locale: &'static str,
    /// Symbol prefixed to formatted amounts
    pub symbol: &'static str,
    /// Human readable name
    pub name: &'static str,
}

lazy_static! {
    static ref SUPPORTED_CURRENCIES: HashMap<&'static str, CurrencySpec> = {
        let mut m = HashMap::new();
        m.insert(
            "dolar",
            CurrencySpec {
                api_code: "dolar",
                display_code: "USD",
                locale: "es-CL",
                symbol: "US$",
                name: "Dólar observado",
            },
        );
        m.insert(
            "euro",
            CurrencySpec {
                api_code: "euro",
                display_code: "EUR",
                locale: "es-CL",
                symbol: "€",
                name: "Euro",
            },
        );
        m
    };
}

/// Look up a supported currency by indicator code (case-insensitive)
pub fn find_currency(code: &str) -> Option<&'static CurrencySpec> {
    SUPPORTED_CURRENCIES.get(code.trim().to_lowercase().as_str())
}

/// All supported currencies in a stable order, for listings
pub fn supported_currencies() -> Vec<&'static CurrencySpec> {
    let mut all: Vec<&'static CurrencySpec> = SUPPORTED_CURRENCIES.values().collect();
    all.sort_by_key(|c| c.api_code);
    all
}
