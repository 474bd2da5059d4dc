pub mod response;

pub use response::HealthResponse;

use crate::usecases::common::{HttpMethod, UseCaseMetadata};

pub struct HealthCheck;

impl UseCaseMetadata for HealthCheck {
    fn usecase_index() -> &'static str {
        "u105"
    }

    fn usecase_name() -> &'static str {
        "health_check"
    }

    fn display_name() -> &'static str {
        "Backend status"
    }

    fn method() -> HttpMethod {
        HttpMethod::Get
    }

    fn path() -> &'static str {
        "/health"
    }
}
