//! A fake opentracker serving a fixed stats report.
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Deserialize)]
struct StatsQuery {
    mode: Option<String>,
}

struct Stats {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
}

pub struct FakeOpentracker {
    pub addr: SocketAddr,
    stats: Arc<Stats>,
    server: JoinHandle<()>,
}

impl FakeOpentracker {
    /// Serves the report with a `200 OK` status.
    pub async fn serving(report: &str) -> Self {
        Self::responding(StatusCode::OK, report).await
    }

    /// # Panics
    ///
    /// Will panic if it can not bind to a local port.
    pub async fn responding(status: StatusCode, body: &str) -> Self {
        let stats = Arc::new(Stats {
            status,
            body: body.to_owned(),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new().route("/stats", get(stats_handler)).with_state(stats.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind the fake opentracker");
        let addr = listener.local_addr().expect("it should get the fake opentracker address");

        let server = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .await
                .expect("the fake opentracker should run");
        });

        Self { addr, stats, server }
    }

    /// Number of stats requests received so far.
    pub fn hits(&self) -> usize {
        self.stats.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FakeOpentracker {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn stats_handler(State(stats): State<Arc<Stats>>, Query(query): Query<StatsQuery>) -> (StatusCode, String) {
    stats.hits.fetch_add(1, Ordering::SeqCst);

    if query.mode.as_deref() != Some("everything") {
        return (StatusCode::BAD_REQUEST, "only the everything mode is served".to_owned());
    }

    (stats.status, stats.body.clone())
}

/// An address where nothing is listening.
///
/// # Panics
///
/// Will panic if it can not bind to a local port.
pub fn unreachable_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("it should bind a local port");

    listener.local_addr().expect("it should get the local address")
}
