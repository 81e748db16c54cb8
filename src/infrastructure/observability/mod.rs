//! Pull-based observability for the recycler exporter.
//!
//! A single `GET /metrics` route drives everything: each inbound scrape
//! triggers one upstream fetch and responds with the freshly collected
//! gauges in Prometheus text exposition format. There is no background
//! collection loop and no state shared between scrapes.

pub mod exporter;
