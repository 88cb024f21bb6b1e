//! Graceful shutdown trigger shared by both binaries.

/// Resolves once Ctrl-C (SIGINT) is received.
///
/// Passed to `axum::serve(..).with_graceful_shutdown` so in-flight requests
/// finish before the listener closes.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
