//! Snippet controller.

use crate::{
    extractors::{AuthenticatedUser, ValidatedJson},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use snipvault_core::Snippet;
use snipvault_service::CreateSnippetRequest;
use tracing::debug;

const FETCH_FAILED: &str = "Failed to fetch snippets";
const CREATE_FAILED: &str = "Failed to create snippet";

/// Query string for listing snippets.
#[derive(Debug, Default, Deserialize)]
pub struct SnippetQuery {
    /// Optional search text; empty means no search.
    pub search: Option<String>,
}

impl SnippetQuery {
    /// Returns the search text, treating an empty value as absent.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|q| !q.is_empty())
    }
}

/// Creates the snippet router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_snippets).post(create_snippet))
}

/// List or search the caller's snippets.
async fn list_snippets(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SnippetQuery>,
) -> ApiResult<Vec<Snippet>> {
    debug!("List snippets request for user {}", user.user_id);

    let snippets = state
        .snippet_service
        .fetch_snippets(user.user_id, query.search())
        .await
        .map_err(|e| AppError::with_public_message(e, FETCH_FAILED))?;

    ok(snippets)
}

/// Create a snippet for the caller.
async fn create_snippet(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateSnippetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Snippet>>), AppError> {
    debug!("Create snippet request for user {}: {}", user.user_id, request.title);

    let snippet = state
        .snippet_service
        .create_snippet(user.user_id, request)
        .await
        .map_err(|e| AppError::with_public_message(e, CREATE_FAILED))?;

    Ok(created(snippet))
}
