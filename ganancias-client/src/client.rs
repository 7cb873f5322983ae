use reqwest::multipart;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use ganancias_core::models::{
    AnnualCalculationRequest, AnnualProjection, CalculationRequest, CalculationResult,
    DeductionCatalog, F572Summary,
};

use crate::config::ApiConfig;
use crate::error::ApiError;

const GENERIC_ERROR_DETAIL: &str = "error en la respuesta del servidor";

/// Shape of the service's non-2xx bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Thin typed client over the service's four endpoints.
///
/// Calls are independent asynchronous operations with no mutual exclusion;
/// overlapping submissions are possible and the last response wins. The
/// only cancellation mechanism is the calculation timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /deducciones`: the optional-deduction catalog with annual caps.
    pub async fn fetch_catalog(&self) -> Result<DeductionCatalog, ApiError> {
        let url = self.config.endpoint("/deducciones");
        debug!(%url, "fetching deduction catalog");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// `POST /calcular`: current-month calculation.
    pub async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ApiError> {
        self.post_json("/calcular", request).await
    }

    /// `POST /calcular-anual`: current month plus year-end projection.
    pub async fn calculate_annual(
        &self,
        request: &AnnualCalculationRequest,
    ) -> Result<AnnualProjection, ApiError> {
        self.post_json("/calcular-anual", request).await
    }

    /// `POST /upload-f572`: multipart upload of an F.572 PDF. The service
    /// parses it and returns per-type deduction totals with caps applied.
    pub async fn upload_f572(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<F572Summary, ApiError> {
        let url = self.config.endpoint("/upload-f572");
        debug!(%url, file_name, size = bytes.len(), "uploading F.572");

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        Self::decode(response).await
    }

    /// Both calculation posts run under the configured timeout; a slow
    /// cold-starting service aborts into [`ApiError::Timeout`].
    async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!(%url, "posting calculation request");
        let response = self
            .http
            .post(&url)
            .json(body)
            .timeout(self.config.calc_timeout())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| GENERIC_ERROR_DETAIL.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }
        response.json().await.map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_body_parses_fastapi_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Error al parsear PDF"}"#).unwrap();

        assert_eq!(body.detail, "Error al parsear PDF");
    }

    #[test]
    fn client_builds_with_default_config() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();

        assert_eq!(client.config().base_url(), "http://localhost:8000");
    }
}
