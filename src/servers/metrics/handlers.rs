use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use tracing::error;

use super::resources::Report;
use super::{exposition, responses, ScrapeContext, METRICS_API_LOG_TARGET};

/// It runs one full scrape cycle against the upstream tracker.
///
/// A failed cycle is fatal for the exporter: no partial metrics are returned
/// and the main process is notified so it can terminate.
pub async fn metrics_handler(State(context): State<Arc<ScrapeContext>>) -> Response {
    let measurements = match context.collector.collect().await {
        Ok(measurements) => measurements,
        Err(err) => {
            error!(target: METRICS_API_LOG_TARGET, "Failed scraping the upstream tracker: {err}");
            context.abort(err);
            return responses::scrape_failed_response();
        }
    };

    match exposition::encode(&measurements) {
        Ok(body) => responses::metrics_response(body),
        Err(err) => {
            error!(target: METRICS_API_LOG_TARGET, "Failed encoding the metrics: {err}");
            responses::scrape_failed_response()
        }
    }
}

/// Endpoint for container health check. It does not contact the upstream.
pub async fn health_check_handler() -> Json<Report> {
    responses::health_check_response()
}
