use crate::usecases::common::{HttpMethod, UseCaseMetadata};

pub struct ClearIndex;

impl UseCaseMetadata for ClearIndex {
    fn usecase_index() -> &'static str {
        "u104"
    }

    fn usecase_name() -> &'static str {
        "clear_index"
    }

    fn display_name() -> &'static str {
        "Clear Database"
    }

    fn method() -> HttpMethod {
        HttpMethod::Delete
    }

    fn path() -> &'static str {
        "/clear"
    }
}
