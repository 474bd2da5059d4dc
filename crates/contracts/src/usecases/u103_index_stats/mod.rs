pub mod response;

pub use response::StatsResponse;

use crate::usecases::common::{HttpMethod, UseCaseMetadata};

pub struct IndexStats;

impl UseCaseMetadata for IndexStats {
    fn usecase_index() -> &'static str {
        "u103"
    }

    fn usecase_name() -> &'static str {
        "index_stats"
    }

    fn display_name() -> &'static str {
        "Database Stats"
    }

    fn method() -> HttpMethod {
        HttpMethod::Get
    }

    fn path() -> &'static str {
        "/stats"
    }
}
