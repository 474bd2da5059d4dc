pub mod u100_document_search;
