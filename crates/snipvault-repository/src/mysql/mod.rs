//! MySQL repository implementations.

mod snippet_repository;

pub use snippet_repository::*;
