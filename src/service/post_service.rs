//! Post service: validates requests and drives the store.

use crate::domain::{NewPost, Post, PostFilter, PostId, PostOrdering, PostPatch, PostStore};
use crate::error::ApiError;

/// Orchestration layer for all post operations.
///
/// Owns the [`PostStore`]. Validation happens here, before the store is
/// touched, so a rejected request never mutates the collection.
#[derive(Debug)]
pub struct PostService {
    store: PostStore,
}

impl PostService {
    /// Creates a new `PostService` over `store`.
    #[must_use]
    pub fn new(store: PostStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`PostStore`].
    #[must_use]
    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Lists every post, sorted when an ordering is given.
    pub async fn list_posts(&self, ordering: Option<PostOrdering>) -> Vec<Post> {
        let mut posts = self.store.list().await;
        if let Some(ordering) = ordering {
            ordering.apply(&mut posts);
        }
        tracing::debug!(count = posts.len(), sorted = ordering.is_some(), "posts listed");
        posts
    }

    /// Creates a post from optional request fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingFields`] if either field is absent and
    /// [`ApiError::CapacityExhausted`] if no id is free.
    pub async fn create_post(
        &self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post, ApiError> {
        let new_post = NewPost::from_parts(title, content)?;
        let post = self.store.insert(new_post).await?;
        tracing::info!(post_id = %post.id, "post created");
        Ok(post)
    }

    /// Applies a partial update and moves the post to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if the post does not exist.
    pub async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post, ApiError> {
        let post = self.store.update(id, patch).await?;
        tracing::info!(post_id = %id, "post updated");
        Ok(post)
    }

    /// Deletes a post permanently.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if the post does not exist.
    pub async fn delete_post(&self, id: PostId) -> Result<Post, ApiError> {
        let post = self.store.remove(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(post)
    }

    /// Returns posts whose title and content contain the filter needles.
    pub async fn search_posts(&self, filter: PostFilter) -> Vec<Post> {
        let matches = self.store.search(&filter).await;
        tracing::debug!(count = matches.len(), "posts searched");
        matches
    }
}
