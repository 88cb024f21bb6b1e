//! Presentation service: serves the static page that drives the post API.
//!
//! The page itself holds no server-side logic. Browsers load
//! `index.html` and its script, which call the post API directly.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Builds a router serving `static_dir`, with `index.html` as fallback for
/// any unknown path.
pub fn build_router(static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let index = ServeFile::new(static_dir.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(static_dir).fallback(index))
        .layer(TraceLayer::new_for_http())
}
