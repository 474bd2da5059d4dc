use serde::{Deserialize, Serialize};

/// Result of indexing one uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Number of chunks the document was split into
    pub chunks_added: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl UploadResponse {
    pub fn with_chunks(chunks_added: u64) -> Self {
        Self {
            chunks_added,
            message: None,
            filename: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_service_body() {
        let json = r#"{
            "message": "Document processed successfully",
            "filename": "report.pdf",
            "chunks_added": 12
        }"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.chunks_added, 12);
        assert_eq!(resp.filename.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn test_minimal_body() {
        let resp: UploadResponse = serde_json::from_str(r#"{"chunks_added":0}"#).unwrap();
        assert_eq!(resp, UploadResponse::with_chunks(0));
    }

    #[test]
    fn test_missing_chunks_is_an_error() {
        assert!(serde_json::from_str::<UploadResponse>(r#"{"detail":"boom"}"#).is_err());
    }
}
