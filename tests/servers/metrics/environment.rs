use std::net::SocketAddr;
use std::sync::Arc;

use opentracker_exporter::bootstrap::jobs::Started;
use opentracker_exporter::servers::metrics::{server, ScrapeContext};
use opentracker_exporter::servers::signals::{Fatal, Halted};
use opentracker_exporter_test_helpers::configuration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub struct Environment {
    pub addr: SocketAddr,
    pub rx_fatal: mpsc::Receiver<Fatal>,
    tx_halt: oneshot::Sender<Halted>,
    server: JoinHandle<Result<(), std::io::Error>>,
}

impl Environment {
    /// Starts a metrics API server on a free local port, scraping the
    /// upstream tracker at `upstream_address`.
    ///
    /// # Panics
    ///
    /// Panics if the server can not be started.
    pub async fn new(upstream_address: &str) -> Self {
        let collector = opentracker_exporter::bootstrap::app::collector(&configuration::ephemeral(upstream_address))
            .expect("it should build the collector");

        let (tx_fatal, rx_fatal) = mpsc::channel(1);
        let (tx_start, rx_start) = oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let context = Arc::new(ScrapeContext::new(collector, tx_fatal));

        let bind_to: SocketAddr = "127.0.0.1:0".parse().expect("it should be a valid socket address");

        let server = tokio::spawn(server::start(bind_to, tx_start, rx_halt, context));

        let started = rx_start.await.expect("the metrics API server should start");

        Self {
            addr: started.address,
            rx_fatal,
            tx_halt,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{path}", self.addr)
    }

    /// # Panics
    ///
    /// Panics if the server does not stop cleanly.
    pub async fn stop(self) {
        self.tx_halt.send(Halted::Normal).expect("the server should be waiting for the halt signal");

        self.server
            .await
            .expect("it should join the server task")
            .expect("the server should stop without errors");
    }
}

