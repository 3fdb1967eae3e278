//! Snippet entity.

use crate::{SnippetId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored code snippet owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Server-generated identifier.
    pub id: SnippetId,

    /// Short human title.
    pub title: String,

    /// The code body.
    pub content: String,

    /// Language label, free-form.
    pub language: String,

    /// Free-form tags in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Owner of the snippet.
    pub user_id: UserId,

    /// Creation timestamp, assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a caller when creating a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSnippet {
    pub title: String,
    pub content: String,
    pub language: String,
    pub tags: Vec<String>,
}

impl Snippet {
    /// Materializes a new snippet for `owner` with a fresh id and the current time.
    #[must_use]
    pub fn create(owner: UserId, new: NewSnippet) -> Self {
        Self::create_at(owner, new, Utc::now())
    }

    /// Like [`Snippet::create`] with an explicit creation timestamp.
    #[must_use]
    pub fn create_at(owner: UserId, new: NewSnippet, created_at: DateTime<Utc>) -> Self {
        Self {
            id: SnippetId::new(),
            title: new.title,
            content: new.content,
            language: new.language,
            tags: new.tags,
            user_id: owner,
            created_at,
        }
    }
}
