//! Scrape-time collection of recycler telemetry.
//!
//! Each call to [`SnapshotCollector::collect`] performs exactly one upstream
//! fetch and turns the resulting snapshot into three gauge families. Nothing
//! is cached between calls; a scrape reports exactly what its own fetch
//! returned, and a failed fetch fails the whole scrape rather than emitting
//! a partial set.

use crate::domain::ports::SnapshotProvider;
use anyhow::Result;
use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, IntGaugeVec, Opts};
use std::sync::Arc;
use tracing::debug;

pub const WATTS_METRIC: &str = "recycler_watts";
pub const ACTIVE_NODES_METRIC: &str = "recycler_active_nodes";
pub const OVERDRIVE_METRIC: &str = "recycler_overdrive_state";

const WATTS_HELP: &str = "Electrical wattage used for recycling flesh";
const ACTIVE_NODES_HELP: &str = "Number of active flesh recycling nodes";
const OVERDRIVE_HELP: &str = "Flesh recycler overdrive ON(1) or OFF(0)";

/// Label names attached to every exported gauge
const LABEL_NAMES: [&str; 2] = ["endpoint", "provider"];

/// Fixed provider tag; the telemetry endpoint is an AWS Lambda URL
pub const PROVIDER_LABEL: &str = "aws";

/// Builds the exported gauge families for one scrape.
pub struct SnapshotCollector {
    provider: Arc<dyn SnapshotProvider>,
    endpoint: String,
}

impl SnapshotCollector {
    /// # Arguments
    /// * `provider` - Upstream snapshot source
    /// * `endpoint` - Endpoint label value, the upstream URL being scraped
    pub fn new(provider: Arc<dyn SnapshotProvider>, endpoint: impl Into<String>) -> Self {
        Self {
            provider,
            endpoint: endpoint.into(),
        }
    }

    /// Run one collection cycle.
    ///
    /// Fetches a fresh snapshot and returns the three gauge families in a
    /// fixed order: wattage, active nodes, overdrive state. If the fetch
    /// fails, the error propagates and no families are produced.
    pub async fn collect(&self) -> Result<Vec<MetricFamily>> {
        let snapshot = self.provider.fetch_snapshot().await?;
        debug!(
            "Collected snapshot: {:.2}W, {} nodes, overdrive {}",
            snapshot.watts, snapshot.active_nodes, snapshot.flesh_recycler_overdrive_state
        );

        let mut families = Vec::with_capacity(3);
        families.extend(self.float_gauge(WATTS_METRIC, WATTS_HELP, snapshot.watts)?);
        families.extend(self.int_gauge(
            ACTIVE_NODES_METRIC,
            ACTIVE_NODES_HELP,
            snapshot.active_nodes,
        )?);
        families.extend(self.int_gauge(
            OVERDRIVE_METRIC,
            OVERDRIVE_HELP,
            snapshot.flesh_recycler_overdrive_state,
        )?);
        Ok(families)
    }

    fn float_gauge(&self, name: &str, help: &str, value: f64) -> Result<Vec<MetricFamily>> {
        let gauge = GaugeVec::new(Opts::new(name, help), &LABEL_NAMES)?;
        gauge
            .with_label_values(&[self.endpoint.as_str(), PROVIDER_LABEL])
            .set(value);
        Ok(gauge.collect())
    }

    fn int_gauge(&self, name: &str, help: &str, value: i64) -> Result<Vec<MetricFamily>> {
        let gauge = IntGaugeVec::new(Opts::new(name, help), &LABEL_NAMES)?;
        gauge
            .with_label_values(&[self.endpoint.as_str(), PROVIDER_LABEL])
            .set(value);
        Ok(gauge.collect())
    }
}
