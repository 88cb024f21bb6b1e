//! The post entity and the inputs that create or modify it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PostId;
use crate::error::ApiError;

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Store-assigned identifier (immutable after creation).
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
}

impl Post {
    /// Builds a post from an id and an already validated [`NewPost`].
    #[must_use]
    pub fn from_new(id: PostId, new_post: NewPost) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
        }
    }
}

/// Validated input for creating a post. Both fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Title of the post to create.
    pub title: String,
    /// Content of the post to create.
    pub content: String,
}

impl NewPost {
    /// Creates a `NewPost`, requiring both fields.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Validates optional request fields into a `NewPost`.
    ///
    /// Empty strings are accepted; only absence is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingFields`] if either field is `None`.
    pub fn from_parts(title: Option<String>, content: Option<String>) -> Result<Self, ApiError> {
        match (title, content) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// Partial update of a post. `None` fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement content, if any.
    pub content: Option<String>,
}

impl PostPatch {
    /// Overwrites the fields of `post` that this patch carries.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}
