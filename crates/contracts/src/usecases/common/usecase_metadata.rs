/// HTTP method a use case is served under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Metadata identifying a use case and the endpoint that serves it
pub trait UseCaseMetadata {
    /// Use case index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "upload_document")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// HTTP method of the backend endpoint
    fn method() -> HttpMethod;

    /// Path of the backend endpoint, relative to the API base URL
    fn path() -> &'static str;

    /// Full name like "u101_upload_document"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Request line like "POST /upload", used in logs
    fn route() -> String {
        format!("{} {}", Self::method().as_str(), Self::path())
    }
}
