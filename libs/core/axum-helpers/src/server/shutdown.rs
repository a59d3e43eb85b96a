//! Graceful-shutdown signal handling.

use tracing::info;

/// Resolve when the process receives SIGINT (Ctrl+C) or, on Unix, SIGTERM.
///
/// Passed to `axum::serve(...).with_graceful_shutdown(...)`; in-flight
/// requests drain before the server future resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
