use serde::Deserialize;

/// Point-in-time telemetry for the flesh recycling fleet.
///
/// Fetched fresh from the upstream endpoint on every scrape and dropped as
/// soon as the gauges are built. Deserialization fails if any field is
/// missing or non-numeric, so a `Snapshot` is always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Snapshot {
    /// Electrical wattage currently drawn by the fleet
    pub watts: f64,
    /// Number of recycling nodes reporting as active
    pub active_nodes: i64,
    /// Overdrive state, nominally 0 (off) or 1 (on). The exporter does not
    /// clamp this; whatever the upstream reports is republished as-is.
    pub flesh_recycler_overdrive_state: i64,
}
