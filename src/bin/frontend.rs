//! blog-frontend entry point.
//!
//! Serves the static page that talks to the post API.

use blog_posts::config::ServiceConfig;
use blog_posts::{frontend, shutdown, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    let app = frontend::build_router(&config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.frontend_listen_addr).await?;
    tracing::info!(
        addr = %config.frontend_listen_addr,
        static_dir = %config.static_dir.display(),
        "frontend listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    Ok(())
}
