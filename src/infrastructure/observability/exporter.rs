use crate::application::collector::SnapshotCollector;
use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus::TextEncoder;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Content type of the Prometheus text exposition format
const TEXT_FORMAT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Build the exporter router with its single scrape route.
pub fn router(collector: Arc<SnapshotCollector>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(collector)
}

/// `GET /metrics`: one upstream fetch per scrape.
///
/// A failed collection answers 500 with a plain-text reason and emits no
/// samples at all, never a partial or zero-valued exposition.
async fn metrics_handler(State(collector): State<Arc<SnapshotCollector>>) -> Response {
    let families = match collector.collect().await {
        Ok(families) => families,
        Err(e) => {
            warn!("Scrape failed: {e:#}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("collection failed: {e:#}\n"),
            )
                .into_response();
        }
    };

    match TextEncoder::new().encode_to_string(&families) {
        Ok(body) => ([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response(),
        Err(e) => {
            warn!("Failed to encode metrics: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("encoding failed: {e}\n"),
            )
                .into_response()
        }
    }
}

/// Serve the scrape endpoint until an interrupt arrives.
pub async fn serve(addr: SocketAddr, collector: Arc<SnapshotCollector>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind metrics listener on {addr}"))?;
    info!("Metrics available at http://{addr}/metrics");

    axum::serve(listener, router(collector))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Metrics server error")?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting..."),
        Err(e) => warn!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::UpstreamError;
    use crate::domain::ports::SnapshotProvider;
    use crate::domain::snapshot::Snapshot;
    use async_trait::async_trait;

    struct StubProvider;

    #[async_trait]
    impl SnapshotProvider for StubProvider {
        async fn fetch_snapshot(&self) -> Result<Snapshot, UpstreamError> {
            Ok(Snapshot {
                watts: 42.5,
                active_nodes: 4,
                flesh_recycler_overdrive_state: 1,
            })
        }
    }

    async fn spawn_router(collector: Arc<SnapshotCollector>) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(collector)).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn scrape_responds_with_text_exposition_format() {
        let collector = Arc::new(SnapshotCollector::new(
            Arc::new(StubProvider),
            "https://example.test/",
        ));
        let addr = spawn_router(collector).await;

        let response = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some(TEXT_FORMAT)
        );

        let body = response.text().await.unwrap();
        assert!(body.contains("recycler_watts"));
        assert!(body.contains("42.5"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let collector = Arc::new(SnapshotCollector::new(
            Arc::new(StubProvider),
            "https://example.test/",
        ));
        let addr = spawn_router(collector).await;

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }
}
