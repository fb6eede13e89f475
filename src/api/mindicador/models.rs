use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One historical observation in an indicator series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorObservation {
    pub fecha: DateTime<Utc>,
    pub valor: f64,
}

/// Response from GET /api/{code}
///
/// The series comes back newest first; `serie[0].valor` is the current rate
/// in CLP per unit of the indicator currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorResponse {
    pub codigo: String,
    pub nombre: String,
    pub unidad_medida: String,
    pub serie: Vec<IndicatorObservation>,
}

/// Error type for mindicador.cl API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Non success-class HTTP status
    #[error("Error al obtener datos de la API: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// Transport-level failure (connectivity, DNS, TLS)
    #[error("Error de red: {0}")]
    Network(String),

    /// Body did not match the expected shape
    #[error("Respuesta inválida de la API: {0}")]
    Malformed(String),

    /// The series came back without observations
    #[error("La API no devolvió observaciones históricas")]
    EmptySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "version": "1.7.0",
        "autor": "mindicador.cl",
        "codigo": "dolar",
        "nombre": "Dólar observado",
        "unidad_medida": "Pesos",
        "serie": [
            { "fecha": "2024-01-05T03:00:00.000Z", "valor": 881.86 },
            { "fecha": "2024-01-04T03:00:00.000Z", "valor": 877.12 },
            { "fecha": "2024-01-03T03:00:00.000Z", "valor": 874.07 }
        ]
    }"#;

    #[test]
    fn test_deserialize_indicator_response() {
        let parsed: IndicatorResponse = serde_json::from_str(FIXTURE).expect("fixture should parse");
        assert_eq!(parsed.codigo, "dolar");
        assert_eq!(parsed.unidad_medida, "Pesos");
        assert_eq!(parsed.serie.len(), 3);
        // API order is newest first
        assert_eq!(parsed.serie[0].valor, 881.86);
        assert!(parsed.serie[0].fecha > parsed.serie[2].fecha);
    }

    #[test]
    fn test_missing_serie_is_rejected() {
        let body = r#"{ "codigo": "dolar", "nombre": "Dólar", "unidad_medida": "Pesos" }"#;
        assert!(serde_json::from_str::<IndicatorResponse>(body).is_err());
    }
}
