//! Opentracker exporter application.
//!
//! The application is a container for the jobs. It only runs one job, the
//! metrics API, on a fixed address:
//!
//! ```text
//! http://0.0.0.0:9574/metrics
//! ```
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::metrics_api;
use crate::core::collector::StatsCollector;
use crate::servers::metrics::ScrapeContext;
use crate::servers::signals::Fatal;

/// The metrics endpoint is always served on this address.
pub const METRICS_API_BIND_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 9574);

/// Starts all the application jobs.
///
/// Fatal scrape errors are sent through `tx_fatal`.
pub async fn start(collector: StatsCollector, tx_fatal: mpsc::Sender<Fatal>) -> Vec<JoinHandle<()>> {
    start_on(METRICS_API_BIND_ADDRESS, collector, tx_fatal).await
}

/// Same as [`start`] but with a custom metrics API address.
pub async fn start_on(bind_to: SocketAddr, collector: StatsCollector, tx_fatal: mpsc::Sender<Fatal>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    let context = Arc::new(ScrapeContext::new(collector, tx_fatal));

    jobs.push(metrics_api::start_job(bind_to, context).await);

    jobs
}
