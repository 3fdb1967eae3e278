//! Snippet service trait definition.

use crate::dto::CreateSnippetRequest;
use async_trait::async_trait;
use snipvault_core::{Interface, Snippet, UserId, VaultResult};

/// Snippet service trait.
///
/// Callers pass an already authenticated user id; every operation is scoped to it.
#[async_trait]
pub trait SnippetService: Interface + Send + Sync {
    /// Lists the user's snippets newest first, or only those matching `search`.
    async fn fetch_snippets(&self, user_id: UserId, search: Option<&str>) -> VaultResult<Vec<Snippet>>;

    /// Validates and stores a new snippet for the user.
    async fn create_snippet(&self, user_id: UserId, request: CreateSnippetRequest) -> VaultResult<Snippet>;
}
