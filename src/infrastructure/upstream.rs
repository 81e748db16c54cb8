use crate::domain::errors::UpstreamError;
use crate::domain::ports::SnapshotProvider;
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Upstream request timeout. The scrape blocks on this fetch; past this
/// the scrape fails rather than hangs.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the recycler telemetry endpoint.
///
/// Performs exactly one GET per call. No retries; a failed fetch fails the
/// scrape and the next scrape simply tries again.
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(UPSTREAM_TIMEOUT)
                .build()
                .unwrap_or_default(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotProvider for UpstreamClient {
    async fn fetch_snapshot(&self) -> Result<Snapshot, UpstreamError> {
        debug!("Fetching recycler telemetry from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout {
                    duration_ms: UPSTREAM_TIMEOUT.as_millis() as u64,
                }
            } else {
                UpstreamError::Unreachable {
                    reason: e.to_string(),
                }
            }
        })?;

        if !response.status().is_success() {
            return Err(UpstreamError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        response
            .json::<Snapshot>()
            .await
            .map_err(|e| UpstreamError::MalformedBody {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_url() {
        let client = UpstreamClient::new("http://127.0.0.1:9/");
        assert_eq!(client.url(), "http://127.0.0.1:9/");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_reported() {
        // Grab an ephemeral port and release it so the connect is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(format!("http://{addr}/"));
        let result = client.fetch_snapshot().await;
        assert!(matches!(result, Err(UpstreamError::Unreachable { .. })));
    }
}
