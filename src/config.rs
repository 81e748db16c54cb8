//! Exporter configuration from environment variables.
//!
//! Every knob has a default matching the deployed telemetry setup, so the
//! exporter runs with no environment at all.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Telemetry endpoint for the flesh recycling fleet
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://oveeblebtyqqgalxzbhwhp4z4i0yhjek.lambda-url.us-west-2.on.aws/";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// URL the snapshot is fetched from on every scrape
    pub upstream_url: String,
    /// Address the scrape endpoint binds to
    pub bind_address: String,
    /// Port the scrape endpoint listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let upstream_url =
            env::var("RECYCLER_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let bind_address =
            env::var("EXPORTER_BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let port = match env::var("EXPORTER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid EXPORTER_PORT: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            upstream_url,
            bind_address,
            port,
        })
    }

    /// Resolve the listen address for the scrape endpoint
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    self.bind_address, self.port
                )
            })
    }
}
