//! es-CL output formatting.
//!
//! The es-CL convention groups thousands with '.' and uses ',' as the
//! decimal separator; short dates are dd-mm-YYYY.

use crate::models::currency::CurrencySpec;
use chrono::NaiveDate;

/// Format an amount with the currency style of `spec`: symbol prefix plus
/// the es-CL numeric convention with two decimals.
pub fn format_currency(amount: f64, spec: &CurrencySpec) -> String {
    format!("{}{}", spec.symbol, format_es_cl(amount, 2))
}

/// es-CL numeric formatting with a fixed number of decimals
pub fn format_es_cl(value: f64, decimals: usize) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// es-CL short date, matching what the browser shows for that locale
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::currency::find_currency;

    #[test]
    fn test_currency_style_usd() {
        let usd = find_currency("dolar").unwrap();
        assert_eq!(format_currency(2.0, usd), "US$2,00");
    }

    #[test]
    fn test_currency_style_eur() {
        let eur = find_currency("euro").unwrap();
        assert_eq!(format_currency(1234.5, eur), "€1.234,50");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_es_cl(1234567.891, 2), "1.234.567,89");
        assert_eq!(format_es_cl(1000.0, 2), "1.000,00");
        assert_eq!(format_es_cl(999.99, 2), "999,99");
    }

    #[test]
    fn test_no_decimals() {
        assert_eq!(format_es_cl(950.75, 0), "951");
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "05-01-2024");
    }
}
