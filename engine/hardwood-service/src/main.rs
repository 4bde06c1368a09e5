//! Hardwood Production Service
//!
//! Entry point for the NBA player comparison API. Loads `.env` and
//! configuration, picks the player backend, serves HTTP and shuts down
//! gracefully on SIGINT/SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use hardwood_service::{
    config::validate_config, graceful_shutdown, initialize_logging, load_configuration,
    setup_signal_handlers, ServiceState,
};

/// Hardwood NBA player comparison service
#[derive(Parser, Debug)]
#[command(name = "hardwood", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// JSON roster file replacing the built-in players
    #[arg(long)]
    roster: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let args = Args::parse();

    // Load configuration; CLI flags win over file and environment
    let mut config = load_configuration(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(roster) = args.roster {
        config.data.roster_file = Some(roster);
    }
    validate_config(&config).context("Invalid configuration")?;

    // Initialize logging as soon as the format is known
    initialize_logging(&config.logging)?;

    info!("Starting Hardwood Service v{}", env!("CARGO_PKG_VERSION"));
    if !dotenv_loaded {
        info!("No .env file found, using process environment");
    }

    // Create service state
    let state = ServiceState::new(config).await?;
    info!("Service state initialized");

    // Setup signal handlers for graceful shutdown
    let shutdown_signal = setup_signal_handlers()?;
    let (mut stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    info!("Signal handlers configured");

    // Start the ApiGateway in a separate task
    let gateway = state.gateway();
    let server_handle = tokio::spawn(async move {
        gateway
            .serve(async move {
                let _ = stop_rx.await;
            })
            .await
            .context("ApiGateway failed")
    });

    info!("Hardwood Service is running. Press Ctrl+C to shutdown gracefully.");
    tokio::select! {
        _ = shutdown_signal => {
            info!("Shutdown signal received. Initiating graceful shutdown...");
        }
        _ = stop_tx.closed() => {
            warn!("ApiGateway exited before a shutdown signal");
            return server_handle.await.context("ApiGateway task panicked")?;
        }
    }
    let _ = stop_tx.send(());

    let shutdown_timeout = Duration::from_secs(state.config.service.shutdown_timeout_secs);
    graceful_shutdown(server_handle, shutdown_timeout).await?;

    info!("Hardwood Service shutdown complete");
    Ok(())
}
