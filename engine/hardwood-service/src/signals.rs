//! Signal handling for graceful shutdown

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Resolves once SIGTERM has been delivered
async fn sigterm(flag: Arc<AtomicBool>) {
    while !flag.load(Ordering::Relaxed) {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

/// Setup signal handlers; the receiver fires on the first Ctrl+C (SIGINT) or SIGTERM
pub fn setup_signal_handlers() -> Result<oneshot::Receiver<()>> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let sigterm_flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGTERM, sigterm_flag.clone())
        .context("Failed to register SIGTERM handler")?;

    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => info!("Ctrl+C signal received"),
                Err(e) => {
                    error!("Failed to listen for Ctrl+C signal: {}", e);
                    return;
                }
            },
            _ = sigterm(sigterm_flag) => info!("SIGTERM signal received"),
        }

        let _ = shutdown_tx.send(());
    });

    Ok(shutdown_rx)
}

/// Wait for the server task to drain, giving up after `shutdown_timeout`
pub async fn graceful_shutdown(
    server_handle: JoinHandle<Result<()>>,
    shutdown_timeout: Duration,
) -> Result<()> {
    info!("Starting graceful shutdown...");

    match timeout(shutdown_timeout, server_handle).await {
        Ok(Ok(Ok(()))) => {
            info!("ApiGateway stopped gracefully");
        }
        Ok(Ok(Err(e))) => {
            error!("ApiGateway failed: {}", e);
        }
        Ok(Err(e)) => {
            error!("ApiGateway task failed: {}", e);
        }
        Err(_) => {
            warn!("ApiGateway did not stop within timeout, forcing shutdown");
        }
    }

    info!("Graceful shutdown complete");
    Ok(())
}
