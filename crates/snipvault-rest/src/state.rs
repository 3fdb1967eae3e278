//! Application state for Axum handlers.

use snipvault_service::SnippetService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub snippet_service: Arc<dyn SnippetService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(snippet_service: Arc<dyn SnippetService>) -> Self {
        Self { snippet_service }
    }
}
