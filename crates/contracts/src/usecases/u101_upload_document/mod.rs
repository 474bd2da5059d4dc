pub mod response;

pub use response::UploadResponse;

use crate::usecases::common::{HttpMethod, UseCaseMetadata};

/// Multipart form field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// File extensions the document service can extract text from
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".txt"];

pub struct UploadDocument;

impl UseCaseMetadata for UploadDocument {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "upload_document"
    }

    fn display_name() -> &'static str {
        "Upload Documents"
    }

    fn method() -> HttpMethod {
        HttpMethod::Post
    }

    fn path() -> &'static str {
        "/upload"
    }
}

/// Value for the `accept` attribute of a file input
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.docx,.txt");
    }

    #[test]
    fn test_route() {
        assert_eq!(UploadDocument::route(), "POST /upload");
        assert_eq!(UploadDocument::full_name(), "u101_upload_document");
    }
}
