//! Book Registry Server
//!
//! Serves the in-memory book catalog over HTTP.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_registry::{config::AppConfig, server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Book Registry v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state
    let state = AppState::new(config);

    let handle = server::spawn(addr, state).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");
    handle.shutdown().await?;

    Ok(())
}
