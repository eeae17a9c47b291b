//! Logic to run the metrics API server.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::Handle;
use tokio::sync::oneshot::{Receiver, Sender};

use super::routes::router;
use super::{ScrapeContext, METRICS_API_LOG_TARGET};
use crate::bootstrap::jobs::Started;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Starts the metrics API server and runs it until a halt or a global
/// shutdown signal is received.
///
/// # Errors
///
/// Will return an error if it can not bind to the socket address or if the
/// server fails while running.
pub async fn start(
    bind_to: SocketAddr,
    tx: Sender<Started>,
    rx_halt: Receiver<Halted>,
    context: Arc<ScrapeContext>,
) -> Result<(), std::io::Error> {
    let socket = std::net::TcpListener::bind(bind_to)?;
    socket.set_nonblocking(true)?;
    let address = socket.local_addr()?;

    let router = router(context, address);

    let handle = Handle::new();

    tokio::task::spawn(graceful_shutdown(
        handle.clone(),
        rx_halt,
        format!("Shutting down metrics API server on: http://{address}"),
    ));

    let running = axum_server::from_tcp(socket)
        .handle(handle)
        .serve(router.into_make_service_with_connect_info::<SocketAddr>());

    if tx.send(Started { address }).is_err() {
        tracing::warn!(target: METRICS_API_LOG_TARGET, "Nobody is waiting for the metrics API server to start");
    }

    running.await
}
