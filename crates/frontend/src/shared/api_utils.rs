//! API utilities for frontend-backend communication
//!
//! Provides URL construction, the shared [`ApiError`] type and helpers that
//! turn a `gloo_net` response into a typed result.

use contracts::usecases::common::{ServiceErrorBody, UseCaseMetadata};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single request to the document service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (service down, CORS, DNS)
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("HTTP {status}{}", .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    Http { status: u16, detail: Option<String> },

    /// The body could not be read as the expected JSON shape
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request could not be built
    #[error("could not build request: {0}")]
    Encode(String),
}

impl ApiError {
    /// True when the service was reached and rejected the request
    pub fn is_response_level(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }

    pub fn encode(err: impl std::fmt::Display) -> Self {
        ApiError::Encode(err.to_string())
    }

    /// Build an [`ApiError::Http`] from a status and the raw error body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ServiceErrorBody>(body)
            .map(|b| b.detail_text())
            .ok()
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            });
        ApiError::Http { status, detail }
    }
}

/// Join the API base URL and an endpoint path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:8000/", "/stats"), "http://localhost:8000/stats");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Full URL of the endpoint serving use case `U`
pub fn endpoint_url<U: UseCaseMetadata>(base: &str) -> String {
    join_url(base, U::path())
}

/// Check the status, then decode the body as `T`
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp).await?;
    resp.json::<T>().await.map_err(ApiError::decode)
}

/// Fail with [`ApiError::Http`] unless the status is 2xx
pub async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u103_index_stats::IndexStats;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/upload"),
            "http://localhost:8000/upload"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "/upload"),
            "http://localhost:8000/upload"
        );
        assert_eq!(join_url("/api", "query"), "/api/query");
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url::<IndexStats>("http://localhost:8000"),
            "http://localhost:8000/stats"
        );
    }

    #[test]
    fn test_http_error_uses_service_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Unsupported file type"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                detail: Some("Unsupported file type".into())
            }
        );
        assert_eq!(err.to_string(), "HTTP 400: Unsupported file type");
        assert!(err.is_response_level());
    }

    #[test]
    fn test_http_error_with_plain_or_empty_body() {
        assert_eq!(
            ApiError::from_status(502, "Bad Gateway").to_string(),
            "HTTP 502: Bad Gateway"
        );
        assert_eq!(ApiError::from_status(500, "  ").to_string(), "HTTP 500");
    }

    #[test]
    fn test_transport_errors_are_not_response_level() {
        assert!(!ApiError::network("Failed to fetch").is_response_level());
        assert!(!ApiError::decode("expected value").is_response_level());
    }
}
