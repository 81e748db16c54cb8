use crate::domain::errors::UpstreamError;
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch one fresh telemetry snapshot from the upstream endpoint
    async fn fetch_snapshot(&self) -> Result<Snapshot, UpstreamError>;
}
