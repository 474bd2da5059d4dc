//! Wire contracts of the document search service
//!
//! One module per use case, each exposing its request/response DTOs and a
//! marker type implementing [`usecases::common::UseCaseMetadata`].

pub mod usecases;
