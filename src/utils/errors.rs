use thiserror::Error;

use crate::api::mindicador::ApiError;
use crate::services::chart_service::ChartError;

/// Errors produced by one conversion submission.
///
/// The first three variants are pre-flight validation failures: they are
/// shown verbatim as localized messages and no network call is made. The
/// wrapped variants are post-flight failures that go through the shared
/// "Ocurrió un error" path with a diagnostic log.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Por favor, ingrese un monto válido en CLP.")]
    InvalidAmount,

    #[error("Por favor, seleccione una moneda para convertir.")]
    MissingCurrency,

    #[error("Moneda no soportada: '{0}'. Escriba `currencies` para ver las disponibles.")]
    UnsupportedCurrency(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

impl ConversionError {
    /// Pre-flight errors abort before any network call and carry their own
    /// user-facing message.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            ConversionError::InvalidAmount
                | ConversionError::MissingCurrency
                | ConversionError::UnsupportedCurrency(_)
        )
    }
}
