use opentracker_exporter::servers::signals::global_shutdown_signal;
use opentracker_exporter::{app, bootstrap};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let (_configuration, collector) = bootstrap::app::setup();

    let (tx_fatal, mut rx_fatal) = mpsc::channel(1);

    let jobs = app::start(collector, tx_fatal).await;

    // handle the signals
    tokio::select! {
        () = global_shutdown_signal() => {
            tracing::info!("Opentracker exporter shutting down ...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            tracing::info!("Opentracker exporter successfully shutdown.");
        }
        Some(fatal) = rx_fatal.recv() => {
            tracing::error!("Opentracker exporter stopped by a failed scrape: {fatal}");
            std::process::exit(1);
        }
    }
}
