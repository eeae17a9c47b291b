//! Metrics API job starter.
//!
//! The [`start_job`] function spawns a new asynchronous task, the
//! "**launcher**". The launcher starts the actual server and sends a message
//! back to the main application once the socket is bound.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::Started;
use crate::servers::logging::STARTED_ON;
use crate::servers::metrics::{server, ScrapeContext, METRICS_API_LOG_TARGET};
use crate::servers::signals::Halted;

/// This function starts a new metrics API server.
///
/// The returned handle resolves when the server stops. The server keeps
/// running until the global shutdown signal is received.
///
/// # Panics
///
/// It would panic if the server fails to start.
pub async fn start_job(bind_to: SocketAddr, context: Arc<ScrapeContext>) -> JoinHandle<()> {
    let (tx_start, rx_start) = oneshot::channel::<Started>();
    let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

    let protocol = "http";

    // Run the API server
    let join_handle = tokio::spawn(async move {
        tracing::info!(target: METRICS_API_LOG_TARGET, "Starting on: {protocol}://{}", bind_to);

        match server::start(bind_to, tx_start, rx_halt, context).await {
            Ok(()) => tracing::info!(target: METRICS_API_LOG_TARGET, "Stopped server running on: {protocol}://{}", bind_to),
            Err(err) => tracing::error!(target: METRICS_API_LOG_TARGET, "Server running on: {protocol}://{} failed: {err}", bind_to),
        }
    });

    // Wait until the server sends the started message
    match rx_start.await {
        Ok(msg) => tracing::info!(target: METRICS_API_LOG_TARGET, "{STARTED_ON}: {protocol}://{}", msg.address),
        Err(e) => panic!("the metrics API server was dropped: {e}"),
    }

    // Wait until the server finishes
    tokio::spawn(async move {
        assert!(!tx_halt.is_closed(), "Halt channel for the metrics API should be open");

        join_handle
            .await
            .expect("it should be able to join to the metrics API server task");
    })
}
