pub mod common;
pub mod u101_upload_document;
pub mod u102_query_documents;
pub mod u103_index_stats;
pub mod u104_clear_index;
pub mod u105_health_check;
