//! Document Search - API client
//!
//! [`DocumentApi`] is the seam between the controller and the network;
//! [`HttpDocumentApi`] is the browser implementation.

use crate::shared::api_utils::{endpoint_url, ensure_ok, read_json, ApiError};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_document::{UploadDocument, UploadResponse, UPLOAD_FIELD};
use contracts::usecases::u102_query_documents::{QueryDocuments, QueryRequest, QueryResponse};
use contracts::usecases::u103_index_stats::{IndexStats, StatsResponse};
use contracts::usecases::u104_clear_index::ClearIndex;
use contracts::usecases::u105_health_check::{HealthCheck, HealthResponse};
use gloo_net::http::Request;

/// Operations offered by the document service
#[allow(async_fn_in_trait)]
pub trait DocumentApi {
    /// Handle of a file picked by the user
    type File;

    fn file_name(file: &Self::File) -> String;

    /// `POST /upload` with the file as multipart field `file`
    async fn upload(&self, file: &Self::File) -> Result<UploadResponse, ApiError>;

    /// `POST /query`
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError>;

    /// `GET /stats`
    async fn stats(&self) -> Result<StatsResponse, ApiError>;

    /// `DELETE /clear`; the body is ignored
    async fn clear(&self) -> Result<(), ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpDocumentApi {
    base_url: String,
}

impl HttpDocumentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url<U: UseCaseMetadata>(&self) -> String {
        log::debug!("{}", U::route());
        endpoint_url::<U>(&self.base_url)
    }
}

impl DocumentApi for HttpDocumentApi {
    type File = web_sys::File;

    fn file_name(file: &web_sys::File) -> String {
        file.name()
    }

    async fn upload(&self, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let form_data = web_sys::FormData::new().map_err(|e| ApiError::encode(format!("{e:?}")))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::encode(format!("{e:?}")))?;

        let resp = Request::post(&self.url::<UploadDocument>())
            .body(form_data)
            .map_err(ApiError::encode)?
            .send()
            .await
            .map_err(ApiError::network)?;
        read_json(resp).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ApiError> {
        let resp = Request::post(&self.url::<QueryDocuments>())
            .json(request)
            .map_err(ApiError::encode)?
            .send()
            .await
            .map_err(ApiError::network)?;
        read_json(resp).await
    }

    async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let resp = Request::get(&self.url::<IndexStats>())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;
        read_json(resp).await
    }

    async fn clear(&self) -> Result<(), ApiError> {
        let resp = Request::delete(&self.url::<ClearIndex>())
            .send()
            .await
            .map_err(ApiError::network)?;
        ensure_ok(resp).await.map(|_| ())
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let resp = Request::get(&self.url::<HealthCheck>())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;
        read_json(resp).await
    }
}
