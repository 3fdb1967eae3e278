//! # Snipvault Security
//!
//! Resolves the requesting user from a bearer JWT. Token issuance exists for
//! tooling and tests; the identity provider proper lives outside this service.

pub mod jwt;

pub use jwt::*;
