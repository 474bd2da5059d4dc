use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Chunks currently stored in the index
    pub total_chunks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let resp: StatsResponse = serde_json::from_str(r#"{"total_chunks":157}"#).unwrap();
        assert_eq!(resp.total_chunks, 157);
    }
}
