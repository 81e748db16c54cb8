use thiserror::Error;

/// Errors surfaced by the upstream telemetry fetch.
///
/// Every variant fails the scrape the same way; the distinction only exists
/// so logs and error bodies say what actually went wrong.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("Upstream request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    #[error("Upstream returned status {status}")]
    BadStatus { status: u16 },

    #[error("Malformed snapshot body: {reason}")]
    MalformedBody { reason: String },
}
