//! Delivery Scoring Service - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    init_logging(&settings.logging);

    info!("=== Delivery Scoring v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Frame stride {}, binding {}",
        settings.analysis.frame_stride, settings.server.bind_addr
    );

    run_server(settings).await
}
