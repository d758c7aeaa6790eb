//! Graceful shutdown trigger for the server.

use std::future::Future;

use tracing::{error, info};

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. If the signal cannot be installed this
/// never resolves, so the server keeps running.
async fn wait_for(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
