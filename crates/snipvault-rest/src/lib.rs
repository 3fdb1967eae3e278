//! # Snipvault REST
//!
//! HTTP surface for Snipvault: the `/api/v1/snippets` endpoints behind bearer
//! token authentication, plus unauthenticated health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
