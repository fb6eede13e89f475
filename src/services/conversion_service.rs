use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::api::mindicador::{ApiError, IndicatorResponse, MindicadorClient};
use crate::models::{currency, ConversionOutcome, ConversionRequest, ConversionResult};
use crate::services::chart_service::{self, ChartHandle, HISTORY_DAYS};
use crate::utils::errors::ConversionError;
use crate::utils::format;

/// Drives the submission pipeline: reset, validate, fetch, convert, chart.
///
/// Owns the only mutable state of the application: the live chart handle and
/// the request generation counter. Every submission starts by bumping the
/// generation and disposing the previous chart; a response that belongs to a
/// superseded generation is discarded instead of rendered.
pub struct ConversionController {
    api: MindicadorClient,
    chart_file: PathBuf,
    chart: Option<ChartHandle>,
    generation: u64,
}

impl ConversionController {
    pub fn new(api: MindicadorClient, chart_file: PathBuf) -> Self {
        Self {
            api,
            chart_file,
            chart: None,
            generation: 0,
        }
    }

    /// Parse and check one submission.
    ///
    /// Amount first, currency second; the first failure wins and nothing is
    /// fetched.
    pub fn validate(
        raw_amount: &str,
        raw_currency: &str,
    ) -> Result<ConversionRequest, ConversionError> {
        let amount: f64 = raw_amount
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConversionError::InvalidAmount);
        }

        let code = raw_currency.trim();
        if code.is_empty() {
            return Err(ConversionError::MissingCurrency);
        }
        let spec = currency::find_currency(code)
            .ok_or_else(|| ConversionError::UnsupportedCurrency(code.to_string()))?;

        Ok(ConversionRequest {
            amount_clp: amount,
            currency: spec,
        })
    }

    /// Run one full submission.
    ///
    /// Returns `Ok(None)` when the response belonged to a superseded
    /// submission and was discarded without rendering.
    pub async fn submit(
        &mut self,
        raw_amount: &str,
        raw_currency: &str,
    ) -> Result<Option<ConversionOutcome>, ConversionError> {
        let generation = self.begin_submission();

        let request = Self::validate(raw_amount, raw_currency)?;
        info!(
            "Convirtiendo {} CLP a {}",
            request.amount_clp, request.currency.display_code
        );

        let indicator = self.api.get_indicator(request.currency.api_code).await?;

        self.complete(generation, request, &indicator)
    }

    /// Post-fetch half of the pipeline: staleness check, rate extraction,
    /// conversion and chart render.
    fn complete(
        &mut self,
        generation: u64,
        request: ConversionRequest,
        indicator: &IndicatorResponse,
    ) -> Result<Option<ConversionOutcome>, ConversionError> {
        if !self.is_current(generation) {
            debug!("Respuesta de la generación {} descartada", generation);
            return Ok(None);
        }

        let newest = indicator.serie.first().ok_or(ApiError::EmptySeries)?;
        if newest.valor <= 0.0 {
            return Err(ApiError::Malformed(format!("valor no positivo: {}", newest.valor)).into());
        }
        let rate = newest.valor;

        let converted = request.amount_clp / rate;
        let result = ConversionResult {
            converted_amount: converted,
            display_code: request.currency.display_code,
            formatted: format::format_currency(converted, request.currency),
        };

        let points = chart_service::prepare_history(&indicator.serie, HISTORY_DAYS);
        let chart_path = if points.len() < 2 {
            warn!("Serie con {} punto(s), se omite el gráfico", points.len());
            None
        } else {
            let handle = chart_service::render_history(
                &points,
                request.currency.display_code,
                &self.chart_file,
            )?;
            let path = handle.path().to_path_buf();
            self.chart = Some(handle);
            Some(path)
        };

        Ok(Some(ConversionOutcome {
            request,
            result,
            rate,
            chart_path,
        }))
    }

    /// Step one of every submission, run unconditionally: bump the generation
    /// and dispose the previous chart so no stale surface survives a failed
    /// attempt.
    fn begin_submission(&mut self) -> u64 {
        self.generation += 1;
        if let Some(old) = self.chart.take() {
            old.dispose();
        }
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mindicador::IndicatorObservation;
    use chrono::{TimeZone, Utc};

    fn controller() -> ConversionController {
        ConversionController::new(
            MindicadorClient::new(),
            std::env::temp_dir().join("cambio_clp_controller_test.png"),
        )
    }

    fn indicator_with_rates(rates: &[f64]) -> IndicatorResponse {
        let len = rates.len() as u32;
        IndicatorResponse {
            codigo: "dolar".to_string(),
            nombre: "Dólar observado".to_string(),
            unidad_medida: "Pesos".to_string(),
            serie: rates
                .iter()
                .enumerate()
                .map(|(i, &valor)| IndicatorObservation {
                    fecha: Utc
                        .with_ymd_and_hms(2024, 1, len - i as u32, 3, 0, 0)
                        .unwrap(),
                    valor,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        for raw in ["", "abc", "NaN", "0", "-5", "inf"] {
            let err = ConversionController::validate(raw, "dolar").unwrap_err();
            assert!(
                matches!(err, ConversionError::InvalidAmount),
                "amount {:?} should be invalid",
                raw
            );
        }
    }

    #[test]
    fn test_validate_amount_checked_before_currency() {
        // Both fields are bad; the amount error wins
        let err = ConversionController::validate("abc", "").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidAmount));
    }

    #[test]
    fn test_validate_missing_currency() {
        let err = ConversionController::validate("1000", "  ").unwrap_err();
        assert!(matches!(err, ConversionError::MissingCurrency));
    }

    #[test]
    fn test_validate_unsupported_currency() {
        let err = ConversionController::validate("1000", "uf").unwrap_err();
        match err {
            ConversionError::UnsupportedCurrency(code) => assert_eq!(code, "uf"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_conversion_uses_newest_rate() {
        let mut ctl = controller();
        let generation = ctl.begin_submission();
        let request = ConversionController::validate("1000", "dolar").unwrap();

        // Single observation keeps the chart out of the picture
        let indicator = indicator_with_rates(&[500.0]);
        let outcome = ctl
            .complete(generation, request, &indicator)
            .unwrap()
            .expect("current generation must render");

        assert_eq!(outcome.rate, 500.0);
        assert_eq!(outcome.result.converted_amount, 2.0);
        assert_eq!(outcome.result.formatted, "US$2,00");
        assert!(outcome.chart_path.is_none());
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let mut ctl = controller();
        let generation = ctl.begin_submission();
        let request = ConversionController::validate("1000", "dolar").unwrap();

        let indicator = indicator_with_rates(&[]);
        let err = ctl.complete(generation, request, &indicator).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Api(ApiError::EmptySeries)
        ));
    }

    #[test]
    fn test_non_positive_rate_is_malformed() {
        let mut ctl = controller();
        let generation = ctl.begin_submission();
        let request = ConversionController::validate("1000", "dolar").unwrap();

        let indicator = indicator_with_rates(&[0.0]);
        let err = ctl.complete(generation, request, &indicator).unwrap_err();
        assert!(matches!(err, ConversionError::Api(ApiError::Malformed(_))));
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut ctl = controller();
        let first = ctl.begin_submission();
        let request = ConversionController::validate("1000", "dolar").unwrap();

        // A second submission starts before the first response lands
        let _second = ctl.begin_submission();

        let indicator = indicator_with_rates(&[500.0]);
        let outcome = ctl.complete(first, request, &indicator).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_begin_submission_disposes_previous_chart() {
        let mut ctl = controller();
        let leftover = std::env::temp_dir().join("cambio_clp_leftover_chart.png");
        std::fs::write(&leftover, b"png").unwrap();
        ctl.chart = Some(ChartHandle::new(leftover.clone()));

        ctl.begin_submission();

        assert!(ctl.chart.is_none());
        assert!(!leftover.exists());
    }
}
