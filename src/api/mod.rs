//! REST API layer: route handlers, DTOs, OpenAPI, and router composition.
//!
//! Post endpoints are mounted under `/api`; system endpoints at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the servable application: routes, middleware and state.
///
/// CORS is permissive so the presentation page may call the API from any
/// origin.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    build_router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::PostStore;
    use crate::service::PostService;

    fn app() -> Router {
        build_app(
            AppState::new(PostService::new(PostStore::default())),
            Duration::from_secs(5),
        )
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
        let Ok(request) = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("request should build");
        };
        let Ok(response) = app.oneshot(request).await;
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn empty_store_lists_empty_array() {
        let (status, body) = send(app(), Method::GET, "/api/posts", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn create_then_list_shares_state() {
        let app = app();
        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/api/posts",
            r#"{"title":"t","content":"c"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(app, Method::GET, "/api/posts", "").await;
        assert_eq!(body, r#"[{"id":0,"title":"t","content":"c"}]"#);
    }

    #[tokio::test]
    async fn search_route_is_not_shadowed_by_id_route() {
        let (status, body) = send(app(), Method::GET, "/api/posts/search?title=x", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn delete_with_non_integer_id_is_bad_request() {
        let (status, body) = send(app(), Method::DELETE, "/api/posts/abc", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid post id: abc"));
    }

    fn error_message(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            panic!("error body is not json: {body}");
        };
        let Some(message) = value.get("error").and_then(|m| m.as_str()) else {
            panic!("error body lacks an `error` string: {body}");
        };
        message.to_string()
    }

    #[tokio::test]
    async fn duplicate_query_keys_get_json_error() {
        let (status, body) = send(
            app(),
            Method::GET,
            "/api/posts?sort=title&direction=asc&direction=desc",
            "",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("direction"));

        let (status, body) = send(app(), Method::GET, "/api/posts/search?title=a&title=b", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("title"));
    }

    #[tokio::test]
    async fn duplicate_update_id_gets_json_error() {
        let (status, body) = send(
            app(),
            Method::PUT,
            "/api/posts?id=1&id=2",
            r#"{"title":"t"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("id"));
    }

    #[tokio::test]
    async fn undecodable_path_id_gets_json_error() {
        let (status, body) = send(app(), Method::DELETE, "/api/posts/%FF", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error_message(&body).is_empty());
    }
}
