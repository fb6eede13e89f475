use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{ApiError, IndicatorResponse};

/// mindicador.cl API client for fetching exchange-rate indicators
pub struct MindicadorClient {
    http_client: HttpClient,
    base_url: String,
}

impl MindicadorClient {
    const DEFAULT_BASE_URL: &'static str = "https://mindicador.cl";

    /// Create a client against the public API
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (env override, testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /api/{code}
    ///
    /// Retrieves the indicator metadata and its historical series, newest
    /// first. No headers, no auth, no request body.
    pub async fn get_indicator(&self, code: &str) -> Result<IndicatorResponse, ApiError> {
        let url = format!("{}/api/{}", self.base_url, code);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response
            .json::<IndicatorResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

impl Default for MindicadorClient {
    fn default() -> Self {
        Self::new()
    }
}
