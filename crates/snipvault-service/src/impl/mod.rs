//! Snippet service implementations.
//!
//! Trait definitions live in the parent module (`snippet_service.rs`).

pub mod snippet_service_impl;

pub use snippet_service_impl::{SnippetServiceImpl, SnippetServiceImplParameters};
