use anyhow::{Context, Result};
use clap::Parser;
use loms::api::create_router;
use loms::catalog::load_catalog;
use loms::config::Config;
use loms::lifecycle::{setup_tracing, LomsSystem};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let config = Config::parse();
    info!(?config, "Starting LOMS");

    let system = LomsSystem::start(config.system());

    let stocks = load_catalog(&config.stock_data)?;
    system
        .seed(stocks)
        .await
        .context("Failed to seed stock store")?;

    let app = create_router(system.service(), config.request_timeout());
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "LOMS ready to accept HTTP requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("LOMS stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
