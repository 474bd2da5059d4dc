use serde::{Deserialize, Serialize};

/// Number of chunks retrieved per question unless configured otherwise
pub const DEFAULT_N_RESULTS: u32 = 3;

fn default_n_results() -> u32 {
    DEFAULT_N_RESULTS
}

/// Natural-language question against the indexed documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,

    /// How many chunks the service should retrieve as context
    #[serde(default = "default_n_results")]
    pub n_results: u32,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            n_results: DEFAULT_N_RESULTS,
        }
    }

    pub fn with_n_results(mut self, n_results: u32) -> Self {
        self.n_results = n_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let req = QueryRequest::new("What is the refund policy?");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "What is the refund policy?", "n_results": 3})
        );
    }

    #[test]
    fn test_n_results_defaults_when_absent() {
        let req: QueryRequest = serde_json::from_str(r#"{"question":"q"}"#).unwrap();
        assert_eq!(req.n_results, DEFAULT_N_RESULTS);
    }
}
