//! blog-posts server entry point.
//!
//! Starts the Axum HTTP server exposing the post API.

use blog_posts::api;
use blog_posts::app_state::AppState;
use blog_posts::config::ServiceConfig;
use blog_posts::{shutdown, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env()?;
    telemetry::init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting blog-posts");

    // Build application state
    let app_state = AppState::from_config(&config);
    tracing::info!(
        count = app_state.post_service.store().len().await,
        "post store ready"
    );

    // Build router
    let app = api::build_app(app_state, config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    Ok(())
}
