//! Ordered in-memory post collection.
//!
//! [`PostStore`] keeps every post in a single `Vec` behind a
//! [`tokio::sync::RwLock`]. Each operation takes the lock exactly once, so
//! reads observe a consistent snapshot and mutations are serialized.

use std::collections::HashSet;

use tokio::sync::RwLock;

use super::post::{NewPost, Post, PostPatch};
use super::post_query::PostFilter;
use super::PostId;
use crate::error::ApiError;

/// Default upper bound (exclusive) for the free-id search.
pub const DEFAULT_ID_SEARCH_LIMIT: u64 = 10_000_000;

/// Central store for all posts.
///
/// Vector order is the observable collection order: inserts append, and
/// updates move the touched post to the tail.
#[derive(Debug)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    id_search_limit: u64,
}

impl PostStore {
    /// Creates an empty store that allocates ids below `id_search_limit`.
    #[must_use]
    pub fn new(id_search_limit: u64) -> Self {
        Self::with_posts(Vec::new(), id_search_limit)
    }

    /// Creates a store pre-populated with `posts`, kept in the given order.
    ///
    /// Callers must supply posts with distinct ids.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>, id_search_limit: u64) -> Self {
        Self {
            posts: RwLock::new(posts),
            id_search_limit,
        }
    }

    /// Returns the three sample posts a fresh service starts with.
    #[must_use]
    pub fn sample_posts() -> Vec<Post> {
        vec![
            Post::from_new(
                PostId::new(1),
                NewPost::new("a post", "This c is the first post."),
            ),
            Post::from_new(
                PostId::new(2),
                NewPost::new("b post", "This a is the second post."),
            ),
            Post::from_new(
                PostId::new(3),
                NewPost::new("c post", "This b is the third post."),
            ),
        ]
    }

    /// Returns a snapshot of all posts in collection order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Appends a new post under the smallest unused id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::CapacityExhausted`] if every id below the
    /// search limit is taken.
    pub async fn insert(&self, new_post: NewPost) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        let id = first_free_id(&posts, self.id_search_limit).ok_or(
            ApiError::CapacityExhausted {
                limit: self.id_search_limit,
            },
        )?;
        let post = Post::from_new(id, new_post);
        posts.push(post.clone());
        Ok(post)
    }

    /// Applies `patch` to the post with `id` and moves it to the tail.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if no post has this id; the
    /// collection is left untouched in that case.
    pub async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        let index = position_of(&posts, id)?;
        let mut post = posts.remove(index);
        patch.apply(&mut post);
        posts.push(post.clone());
        Ok(post)
    }

    /// Removes the post with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if no post has this id.
    pub async fn remove(&self, id: PostId) -> Result<Post, ApiError> {
        let mut posts = self.posts.write().await;
        let index = position_of(&posts, id)?;
        Ok(posts.remove(index))
    }

    /// Returns the posts matching `filter`, in collection order.
    pub async fn search(&self, filter: &PostFilter) -> Vec<Post> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect()
    }

    /// Returns the number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Returns `true` if the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new(DEFAULT_ID_SEARCH_LIMIT)
    }
}

/// Smallest id in `0..limit` not used by any post.
fn first_free_id(posts: &[Post], limit: u64) -> Option<PostId> {
    let used: HashSet<PostId> = posts.iter().map(|post| post.id).collect();
    (0..limit).map(PostId::new).find(|id| !used.contains(id))
}

fn position_of(posts: &[Post], id: PostId) -> Result<usize, ApiError> {
    posts
        .iter()
        .position(|post| post.id == id)
        .ok_or(ApiError::PostNotFound(id))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id.get()).collect()
    }

    async fn insert(store: &PostStore, title: &str, content: &str) -> Post {
        let Ok(post) = store.insert(NewPost::new(title, content)).await else {
            panic!("insert failed");
        };
        post
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_from_zero() {
        let store = PostStore::default();
        assert_eq!(insert(&store, "x", "y").await.id, PostId::new(0));
        assert_eq!(insert(&store, "x", "y").await.id, PostId::new(1));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn freed_id_is_reused() {
        let store = PostStore::default();
        insert(&store, "x", "y").await;
        insert(&store, "x", "y").await;

        assert!(store.remove(PostId::new(0)).await.is_ok());
        let third = insert(&store, "x", "y").await;
        assert_eq!(third.id, PostId::new(0));
        // Reused id still lands at the tail.
        assert_eq!(ids(&store.list().await), vec![1, 0]);
    }

    #[tokio::test]
    async fn insert_skips_ids_taken_by_seed_posts() {
        let store = PostStore::with_posts(PostStore::sample_posts(), DEFAULT_ID_SEARCH_LIMIT);
        assert_eq!(insert(&store, "d", "d").await.id, PostId::new(0));
        assert_eq!(insert(&store, "e", "e").await.id, PostId::new(4));
    }

    #[tokio::test]
    async fn insert_fails_when_limit_reached() {
        let store = PostStore::new(2);
        insert(&store, "x", "y").await;
        insert(&store, "x", "y").await;

        let result = store.insert(NewPost::new("x", "y")).await;
        assert!(matches!(
            result,
            Err(ApiError::CapacityExhausted { limit: 2 })
        ));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn update_moves_post_to_tail() {
        let store = PostStore::with_posts(PostStore::sample_posts(), DEFAULT_ID_SEARCH_LIMIT);
        let patch = PostPatch {
            title: Some("renamed".into()),
            content: None,
        };

        let Ok(updated) = store.update(PostId::new(1), patch).await else {
            panic!("update failed");
        };
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.content, "This c is the first post.");
        assert_eq!(ids(&store.list().await), vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn update_missing_leaves_collection_unchanged() {
        let store = PostStore::with_posts(PostStore::sample_posts(), DEFAULT_ID_SEARCH_LIMIT);
        let before = store.list().await;

        let result = store.update(PostId::new(99), PostPatch::default()).await;
        assert!(matches!(result, Err(ApiError::PostNotFound(id)) if id == PostId::new(99)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn update_on_empty_store_is_not_found() {
        let store = PostStore::default();
        let result = store.update(PostId::new(0), PostPatch::default()).await;
        assert!(matches!(result, Err(ApiError::PostNotFound(_))));
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one() {
        let store = PostStore::with_posts(PostStore::sample_posts(), DEFAULT_ID_SEARCH_LIMIT);

        let Ok(removed) = store.remove(PostId::new(2)).await else {
            panic!("remove failed");
        };
        assert_eq!(removed.title, "b post");
        assert_eq!(ids(&store.list().await), vec![1, 3]);

        let again = store.remove(PostId::new(2)).await;
        assert!(matches!(again, Err(ApiError::PostNotFound(_))));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn search_preserves_collection_order() {
        let store = PostStore::with_posts(PostStore::sample_posts(), DEFAULT_ID_SEARCH_LIMIT);
        let filter = PostFilter::new(None, Some("post.".into()));
        assert_eq!(ids(&store.search(&filter).await), vec![1, 2, 3]);

        let filter = PostFilter::new(Some("a".into()), None);
        assert_eq!(ids(&store.search(&filter).await), vec![1]);
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let store = PostStore::default();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);

        insert(&store, "x", "y").await;
        assert!(!store.is_empty().await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = std::sync::Arc::new(PostStore::default());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(NewPost::new("t", "c")).await.map(|p| p.id)
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let Ok(Ok(id)) = handle.await else {
                panic!("insert task failed");
            };
            assert!(seen.insert(id), "duplicate id {id}");
        }
        assert_eq!(seen.len(), 32);
    }
}
