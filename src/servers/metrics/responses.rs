use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::Report;

/// Content type of the `OpenMetrics` text exposition.
pub const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

#[must_use]
pub fn metrics_response(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, OPENMETRICS_CONTENT_TYPE)], body).into_response()
}

/// `500` response without any sample.
#[must_use]
pub fn scrape_failed_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Unable to scrape the upstream tracker").into_response()
}

#[must_use]
pub fn health_check_response() -> Json<Report> {
    Json(Report::ok())
}
