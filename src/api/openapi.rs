//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::api::dto::{CreatePostRequest, DeletePostResponse, UpdatePostRequest};
use crate::api::handlers::{posts, system};
use crate::domain::{Post, PostId};
use crate::error::ErrorResponse;

/// OpenAPI 3 description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "blog-posts",
        description = "In-memory blog post CRUD API"
    ),
    paths(
        posts::list_posts,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        posts::search_posts,
        system::health_handler,
    ),
    components(schemas(
        Post,
        PostId,
        CreatePostRequest,
        UpdatePostRequest,
        DeletePostResponse,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Posts", description = "Blog post CRUD and search"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/posts",
            "/api/posts/search",
            "/api/posts/{id}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn post_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.map(|c| c.schemas).unwrap_or_default();
        assert!(schemas.contains_key("Post"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
