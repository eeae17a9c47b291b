//! The metrics API.
//!
//! It's the only server the exporter runs. Every request to the metrics
//! endpoint triggers exactly one fresh request to the upstream tracker. There
//! is no cache and no deduplication of concurrent scrapes.
//!
//! # Endpoints
//!
//! - [Get metrics](#get-metrics)
//! - [Health check](#health-check)
//!
//! # Get metrics
//!
//! `GET /metrics`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:9574/metrics"
//! ```
//!
//! **Example response** `200`
//!
//! ```text
//! # HELP tracker_uptime Seconds the tracker has been up.
//! # TYPE tracker_uptime counter
//! tracker_uptime_total 12345.0
//! # HELP tracker_torrents Number of tracked torrents.
//! # TYPE tracker_torrents gauge
//! tracker_torrents 7.0
//! ...
//! # HELP tracker_connections Number of handled requests by protocol and request type.
//! # TYPE tracker_connections counter
//! tracker_connections_total{protocol="tcp",type="accept"} 1001.0
//! ...
//! # HELP tracker_renew Number of renews at a specific interval.
//! # TYPE tracker_renew counter
//! tracker_renew_total{interval="1800"} 42.0
//! # EOF
//! ```
//!
//! **Example response** `500`
//!
//! When the upstream tracker can not be reached, answers with a non-success
//! status, or serves a report that can not be decoded, no metrics are
//! returned and the exporter process terminates.
//!
//! # Health check
//!
//! `GET /health_check`
//!
//! It only checks the exporter itself, it does not contact the upstream.
//!
//! ```json
//! {"status":"Ok"}
//! ```
pub mod exposition;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
pub mod server;

use derive_more::Constructor;
use tokio::sync::mpsc;
use tracing::warn;

use crate::core::collector::StatsCollector;
use crate::core::error::Error;
use crate::servers::signals::Fatal;

/// Target for the metrics API logs.
pub const METRICS_API_LOG_TARGET: &str = "METRICS API";

/// The state shared by all the metrics API requests.
#[derive(Constructor)]
pub struct ScrapeContext {
    pub collector: StatsCollector,
    tx_fatal: mpsc::Sender<Fatal>,
}

impl ScrapeContext {
    /// Reports an unrecoverable scrape error to the main process.
    pub fn abort(&self, error: Error) {
        if let Err(err) = self.tx_fatal.try_send(Fatal::from(error)) {
            warn!(target: METRICS_API_LOG_TARGET, "Unable to notify the fatal scrape error: {err}");
        }
    }
}
