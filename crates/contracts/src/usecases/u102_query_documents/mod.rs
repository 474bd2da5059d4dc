pub mod request;
pub mod response;

pub use request::{QueryRequest, DEFAULT_N_RESULTS};
pub use response::{QueryResponse, SourceRef};

use crate::usecases::common::{HttpMethod, UseCaseMetadata};

pub struct QueryDocuments;

impl UseCaseMetadata for QueryDocuments {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "query_documents"
    }

    fn display_name() -> &'static str {
        "Ask Questions"
    }

    fn method() -> HttpMethod {
        HttpMethod::Post
    }

    fn path() -> &'static str {
        "/query"
    }
}
