//! Domain model.

mod snippet;

pub use snippet::*;
