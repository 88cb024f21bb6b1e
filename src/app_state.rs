//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::domain::PostStore;
use crate::service::PostService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Post service owning the collection.
    pub post_service: Arc<PostService>,
}

impl AppState {
    /// Wraps a service into shareable state.
    #[must_use]
    pub fn new(post_service: PostService) -> Self {
        Self {
            post_service: Arc::new(post_service),
        }
    }

    /// Builds state from configuration, seeding sample posts if enabled.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let posts = if config.seed_posts {
            PostStore::sample_posts()
        } else {
            Vec::new()
        };
        let store = PostStore::with_posts(posts, config.id_search_limit);
        Self::new(PostService::new(store))
    }
}
