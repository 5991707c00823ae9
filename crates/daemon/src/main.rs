//! Content Service - Main Entry Point
//! gRPC front-end translating Put calls into service bus JSON-RPC requests

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Import workspace crates
use config::DaemonConfig;
use contentservice_api_grpc::GrpcServer;
use contentservice_infra_http::HttpServiceBusCaller;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::parse();

    // 2. Initialize logging
    logging::init(config.log_format)?;

    info!("Content Service v{} starting...", VERSION);

    config.validate().context("Invalid configuration")?;

    // 3. Setup dependencies (DI wiring)
    let servicebus = config.servicebus();
    info!(
        endpoint = %servicebus.endpoint,
        timeout_secs = servicebus.timeout.as_secs(),
        "Configuring service bus caller..."
    );
    let caller = Arc::new(
        HttpServiceBusCaller::new(servicebus).context("Service bus caller setup failed")?,
    );

    // 4. Start gRPC server
    info!("Starting gRPC server...");
    let mut handle = GrpcServer::new(config.grpc(), caller)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("gRPC server start failed: {}", e))?;

    info!(addr = %handle.local_addr(), "✅ System ready. Waiting for Put calls...");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    handle.stop();
    match tokio::time::timeout(SHUTDOWN_GRACE, handle.stopped()).await {
        Ok(result) => result.map_err(|e| anyhow::anyhow!("gRPC server stop failed: {}", e))?,
        Err(_) => tracing::warn!("In-flight calls did not finish within the grace period"),
    }

    info!("Shutdown complete.");

    Ok(())
}
