use serde::{Deserialize, Serialize};

/// Value of `status` reported by a healthy service
pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_healthy() {
        let ok: HealthResponse = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(ok.is_healthy());
        let degraded = HealthResponse {
            status: "starting".into(),
        };
        assert!(!degraded.is_healthy());
    }
}
