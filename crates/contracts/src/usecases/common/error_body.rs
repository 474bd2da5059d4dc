use serde::{Deserialize, Serialize};

/// Error payload returned by the document service on non-2xx responses
///
/// The service answers with `{"detail": "..."}`; validation errors put a
/// structured value into `detail`, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub detail: serde_json::Value,
}

impl ServiceErrorBody {
    /// Human-readable form of `detail`
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"detail":"Unsupported file type"}"#).unwrap();
        assert_eq!(body.detail_text(), "Unsupported file type");
    }

    #[test]
    fn test_structured_detail() {
        let body: ServiceErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","question"]}]}"#).unwrap();
        assert_eq!(body.detail_text(), r#"[{"loc":["body","question"]}]"#);
    }
}
