//! Custom Axum extractors.

mod authenticated_user;
mod validated;

pub use authenticated_user::*;
pub use validated::*;
