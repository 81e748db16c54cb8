// Upstream telemetry snapshot
pub mod snapshot;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

pub use snapshot::Snapshot;
