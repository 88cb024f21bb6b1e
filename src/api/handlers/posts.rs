//! Post CRUD handlers: list, create, update, delete, search.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};

use crate::api::dto::{
    CreatePostRequest, DeletePostResponse, ListPostsParams, SearchPostsParams, UpdatePostParams,
    UpdatePostRequest,
};
use crate::app_state::AppState;
use crate::domain::{Post, PostId};
use crate::error::{ApiError, ErrorResponse};

/// `GET /api/posts` — List posts, optionally sorted.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] when the query string cannot be
/// decoded.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns every post in collection order, or sorted when both `sort` and `direction` are given.",
    params(ListPostsParams),
    responses(
        (status = 200, description = "All posts", body = Vec<Post>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    params: Result<Query<ListPostsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.post_service.list_posts(params.ordering()).await))
}

/// `POST /api/posts` — Create a post.
///
/// # Errors
///
/// Returns [`ApiError::MissingFields`] when `title` or `content` is absent
/// and [`ApiError::InvalidRequest`] when the body is not valid JSON.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    summary = "Create a post",
    description = "Stores a new post under the smallest free id and appends it to the collection.",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post created", body = Post),
        (status = 400, description = "Missing fields or malformed body", body = ErrorResponse),
        (status = 507, description = "No free post id", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let post = state
        .post_service
        .create_post(req.title, req.content)
        .await?;
    Ok(Json(post))
}

/// `PUT /api/posts?id=<id>` — Update a post and move it to the end.
///
/// # Errors
///
/// Returns [`ApiError::PostNotFound`] if the post does not exist and
/// [`ApiError::InvalidRequest`] for a missing/non-integer id or bad body.
#[utoipa::path(
    put,
    path = "/api/posts",
    tag = "Posts",
    summary = "Update a post",
    description = "Overwrites the fields present in the body and moves the post to the end of the collection.",
    params(UpdatePostParams),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "Post not found or malformed request", body = ErrorResponse),
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    params: Result<Query<UpdatePostParams>, QueryRejection>,
    body: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let raw_id = params
        .id
        .ok_or_else(|| ApiError::InvalidRequest("query parameter `id` is required".to_string()))?;
    let id = parse_post_id(&raw_id)?;
    let Json(req) = body?;

    let post = state.post_service.update_post(id, req.into()).await?;
    Ok(Json(post))
}

/// `DELETE /api/posts/{id}` — Delete a post.
///
/// # Errors
///
/// Returns [`ApiError::PostNotFound`] if the post does not exist and
/// [`ApiError::InvalidRequest`] if the id is not a decimal integer.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    summary = "Delete a post",
    description = "Removes the post permanently. Its id becomes available for reuse.",
    params(
        ("id" = u64, Path, description = "Post id"),
    ),
    responses(
        (status = 200, description = "Post deleted", body = DeletePostResponse),
        (status = 400, description = "Post not found or invalid id", body = ErrorResponse),
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = raw_id?;
    let id = parse_post_id(&raw_id)?;
    state.post_service.delete_post(id).await?;
    Ok(Json(DeletePostResponse {
        message: format!("Post with id {id} has been deleted successfully."),
    }))
}

/// `GET /api/posts/search` — Substring search on title and content.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] when the query string cannot be
/// decoded.
#[utoipa::path(
    get,
    path = "/api/posts/search",
    tag = "Posts",
    summary = "Search posts",
    description = "Returns posts whose title contains `title` and whose content contains `content`. Omitted parameters match everything.",
    params(SearchPostsParams),
    responses(
        (status = 200, description = "Matching posts", body = Vec<Post>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    )
)]
pub async fn search_posts(
    State(state): State<AppState>,
    params: Result<Query<SearchPostsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.post_service.search_posts(params.into()).await))
}

/// Post routes, nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(list_posts).post(create_post).put(update_post),
        )
        .route("/posts/search", get(search_posts))
        .route("/posts/{id}", delete(delete_post))
}

fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidRequest(format!("invalid post id: {raw}")))
}
