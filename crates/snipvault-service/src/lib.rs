//! # Snipvault Service
//!
//! Snippet use cases and the cache-aside layer in front of the snippet store.
//!
//! Reads go cache first and fall through to the store on a miss, populating the
//! cache on the way back. Creating a snippet drops the user's listing entry.
//! Search entries are left to expire on their own, so a search repeated within
//! its TTL may not show snippets created since it was first run.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod snippet_service;

pub use cache::*;
pub use dto::*;
pub use r#impl::*;
pub use snippet_service::*;
