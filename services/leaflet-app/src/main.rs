//! Leaflet WMS wizard service.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use leaflet_app::{build_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.tracing_level())
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    config.validate()?;

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics exporter initialized");

    let addr = config.listen_addr()?;
    let state = Arc::new(AppState::new(config)?.with_prometheus(prometheus_handle));
    let app = build_router(state);

    info!(address = %addr, "Starting Leaflet WMS wizard");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
