//! Chart data models

use chrono::NaiveDate;

/// A single observation on the exchange-rate history chart
#[derive(Debug, Clone, PartialEq)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub value: f64,
}
