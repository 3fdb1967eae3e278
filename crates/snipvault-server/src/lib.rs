//! # Snipvault Server Library
//!
//! Wiring, observability setup, and startup helpers for the Snipvault binary.

pub mod di;
pub mod observability;
pub mod startup;
