//! Data transfer objects for the service boundary.

mod snippet_dto;

pub use snippet_dto::*;
