//! Snippet DTOs.

use serde::{Deserialize, Serialize};
use snipvault_core::NewSnippet;
use validator::Validate;

/// Request to create a new snippet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSnippetRequest {
    #[validate(
        length(max = 200, message = "Title cannot exceed 200 characters"),
        custom(function = "snipvault_core::rules::not_blank", message = "Title is required")
    )]
    pub title: String,

    #[validate(custom(function = "snipvault_core::rules::not_blank", message = "Content is required"))]
    pub content: String,

    #[validate(
        length(max = 50, message = "Language cannot exceed 50 characters"),
        custom(function = "snipvault_core::rules::not_blank", message = "Language is required")
    )]
    pub language: String,

    #[serde(default)]
    #[validate(custom(
        function = "snipvault_core::rules::valid_tags",
        message = "Tags must be non-blank and at most 50 characters"
    ))]
    pub tags: Vec<String>,
}

impl From<CreateSnippetRequest> for NewSnippet {
    fn from(request: CreateSnippetRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            language: request.language,
            tags: request.tags,
        }
    }
}
