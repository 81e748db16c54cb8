//! Recycler Exporter - Prometheus exporter for flesh recycler telemetry
//!
//! Republishes the fleet telemetry document served by the upstream AWS
//! Lambda endpoint as three Prometheus gauges. Collection is scrape-driven:
//! every `GET /metrics` performs its own upstream fetch, so the reported
//! values are exactly as fresh as the scrape that asked for them.
//!
//! # Usage
//! ```sh
//! EXPORTER_PORT=8000 cargo run
//! ```
//!
//! # Environment Variables
//! - `RECYCLER_UPSTREAM_URL` - Telemetry endpoint to fetch (default: fleet Lambda URL)
//! - `EXPORTER_BIND_ADDRESS` - Scrape endpoint bind address (default: 0.0.0.0)
//! - `EXPORTER_PORT` - Scrape endpoint port (default: 8000)

use anyhow::Result;
use recycler_exporter::application::collector::SnapshotCollector;
use recycler_exporter::config::Config;
use recycler_exporter::infrastructure::UpstreamClient;
use recycler_exporter::infrastructure::observability::exporter;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Recycler Exporter {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Upstream endpoint: {}", config.upstream_url);

    let provider = Arc::new(UpstreamClient::new(&config.upstream_url));
    let collector = Arc::new(SnapshotCollector::new(provider, &config.upstream_url));

    exporter::serve(config.socket_addr()?, collector).await?;

    info!("Recycler Exporter stopped.");
    Ok(())
}
