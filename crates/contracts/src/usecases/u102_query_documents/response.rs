use serde::{Deserialize, Serialize};

/// Provenance of one retrieved chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Document identifier, usually the uploaded filename
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<u64>,

    /// Preview of the chunk text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SourceRef {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            chunk_id: None,
            text: None,
        }
    }
}

/// Generated answer with the chunks it was based on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,

    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_sources() {
        let resp: QueryResponse =
            serde_json::from_str(r#"{"answer":"42","sources":[{"source":"doc1.pdf"}]}"#).unwrap();
        assert_eq!(resp.answer, "42");
        assert_eq!(resp.sources, vec![SourceRef::new("doc1.pdf")]);
    }

    #[test]
    fn test_full_sources() {
        let json = r#"{
            "answer": "Based on the context: ...",
            "sources": [
                {"source": "a.txt", "chunk_id": 4, "text": "refunds are issued within..."}
            ]
        }"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sources[0].chunk_id, Some(4));
        assert_eq!(
            resp.sources[0].text.as_deref(),
            Some("refunds are issued within...")
        );
    }

    #[test]
    fn test_sources_may_be_absent() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer":"none"}"#).unwrap();
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_error_body_is_rejected() {
        assert!(serde_json::from_str::<QueryResponse>(r#"{"detail":"boom"}"#).is_err());
    }
}
