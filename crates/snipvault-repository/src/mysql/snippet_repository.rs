//! MySQL snippet repository implementation.

use crate::{traits::SnippetRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use snipvault_core::{NewSnippet, Snippet, SnippetId, UserId, VaultError, VaultResult};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "SELECT id, user_id, title, content, language, tags, created_at FROM snippets";

/// MySQL snippet repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = SnippetRepository)]
pub struct MySqlSnippetRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlSnippetRepository {
    /// Creates a new MySQL snippet repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn find_by_id(&self, id: SnippetId) -> VaultResult<Snippet> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query_as::<_, SnippetRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?
            .ok_or_else(|| VaultError::not_found("Snippet", id))?;

        Snippet::try_from(row)
    }
}

/// Database row representation of a snippet.
#[derive(Debug, FromRow)]
struct SnippetRow {
    id: String,
    user_id: String,
    title: String,
    content: String,
    language: String,
    tags: Json<Vec<String>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SnippetRow> for Snippet {
    type Error = VaultError;

    fn try_from(row: SnippetRow) -> Result<Self, Self::Error> {
        Ok(Snippet {
            id: SnippetId::from_uuid(parse_uuid(&row.id)?),
            user_id: UserId::from_uuid(parse_uuid(&row.user_id)?),
            title: row.title,
            content: row.content,
            language: row.language,
            tags: row.tags.0,
            created_at: row.created_at,
        })
    }
}

fn parse_uuid(s: &str) -> VaultResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| VaultError::Internal(format!("Invalid UUID in database: {}", e)))
}

/// Builds a `LIKE` pattern matching `query` as a literal substring.
pub(crate) fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn rows_to_snippets(rows: Vec<SnippetRow>) -> VaultResult<Vec<Snippet>> {
    rows.into_iter().map(Snippet::try_from).collect()
}

#[async_trait]
impl SnippetRepository for MySqlSnippetRepository {
    async fn find_by_owner(&self, owner: UserId) -> VaultResult<Vec<Snippet>> {
        debug!("Listing snippets for user: {}", owner);

        let sql = format!("{SELECT_COLUMNS} WHERE user_id = ? ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, SnippetRow>(&sql)
            .bind(owner.to_string())
            .fetch_all(self.pool.inner())
            .await?;

        rows_to_snippets(rows)
    }

    async fn search_by_owner(&self, owner: UserId, query: &str) -> VaultResult<Vec<Snippet>> {
        debug!("Searching snippets for user {}: {:?}", owner, query);

        let sql = format!(
            "{SELECT_COLUMNS} WHERE user_id = ? \
             AND (LOWER(title) LIKE LOWER(?) OR JSON_CONTAINS(tags, JSON_QUOTE(?))) \
             ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, SnippetRow>(&sql)
            .bind(owner.to_string())
            .bind(contains_pattern(query))
            .bind(query)
            .fetch_all(self.pool.inner())
            .await?;

        rows_to_snippets(rows)
    }

    async fn create(&self, owner: UserId, snippet: NewSnippet) -> VaultResult<Snippet> {
        let snippet = Snippet::create(owner, snippet);
        debug!("Inserting snippet {} for user {}", snippet.id, owner);

        sqlx::query(
            r#"
            INSERT INTO snippets (id, user_id, title, content, language, tags, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(snippet.id.to_string())
        .bind(owner.to_string())
        .bind(&snippet.title)
        .bind(&snippet.content)
        .bind(&snippet.language)
        .bind(Json(&snippet.tags))
        .bind(snippet.created_at)
        .execute(self.pool.inner())
        .await?;

        // Read back so the timestamp carries the column's stored precision.
        self.find_by_id(snippet.id).await
    }
}

impl std::fmt::Debug for MySqlSnippetRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSnippetRepository").finish_non_exhaustive()
    }
}
