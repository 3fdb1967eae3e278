//! REST API controllers.

pub mod health_controller;
pub mod snippet_controller;
