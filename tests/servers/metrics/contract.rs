use std::time::Duration;

use opentracker_exporter::app;
use opentracker_exporter::servers::metrics::resources::{Report, Status};
use opentracker_exporter::servers::metrics::responses::OPENMETRICS_CONTENT_TYPE;
use opentracker_exporter_test_helpers::fixtures::{EXAMPLE_REPORT, FULL_REPORT, MALFORMED_REPORT};
use reqwest::StatusCode;

use super::environment::Environment;
use crate::common::upstream::{unreachable_address, FakeOpentracker};

async fn get(url: &str) -> reqwest::Response {
    reqwest::Client::builder()
        .build()
        .expect("it should build the http client")
        .get(url)
        .send()
        .await
        .expect("it should get a response")
}

async fn assert_fatal_was_reported(env: &mut Environment) {
    let fatal = tokio::time::timeout(Duration::from_secs(5), env.rx_fatal.recv())
        .await
        .expect("it should report the fatal error in time");

    assert!(fatal.is_some(), "it should report a fatal error");
}

#[tokio::test]
async fn it_should_expose_the_upstream_stats_as_metrics() {
    let upstream = FakeOpentracker::serving(EXAMPLE_REPORT).await;
    let env = Environment::new(&upstream.addr.to_string()).await;

    let response = get(&env.url("metrics")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").expect("it should have a content type"),
        OPENMETRICS_CONTENT_TYPE
    );

    let body = response.text().await.expect("it should have a body");

    assert!(body.contains("tracker_uptime_total 12345"));
    assert!(body.contains("tracker_torrents 7"));
    assert!(body.contains("tracker_renew_total{interval=\"1800\"} 42"));
    assert!(body.trim_end().ends_with("# EOF"));

    env.stop().await;
}

#[tokio::test]
async fn it_should_expose_every_family_of_a_full_report() {
    let upstream = FakeOpentracker::serving(FULL_REPORT).await;
    let env = Environment::new(&upstream.addr.to_string()).await;

    let body = get(&env.url("metrics")).await.text().await.expect("it should have a body");

    for family in [
        "tracker_uptime_total",
        "tracker_torrents",
        "tracker_peers",
        "tracker_seeds",
        "tracker_completed_total",
        "tracker_mutex_stall_total",
        "tracker_connections_total",
        "tracker_connections_livesync_total",
        "tracker_renew_total",
        "tracker_http_error_total",
    ] {
        assert!(body.contains(family), "it should expose {family}");
    }

    assert!(body.contains("tracker_connections_total{protocol=\"udp\",type=\"mismatch\"} 2005"));

    env.stop().await;
}

#[tokio::test]
async fn it_should_request_the_upstream_report_once_per_scrape() {
    let upstream = FakeOpentracker::serving(EXAMPLE_REPORT).await;
    let env = Environment::new(&upstream.addr.to_string()).await;

    assert_eq!(upstream.hits(), 0);

    get(&env.url("metrics")).await;
    assert_eq!(upstream.hits(), 1);

    get(&env.url("metrics")).await;
    assert_eq!(upstream.hits(), 2);

    env.stop().await;
}

#[tokio::test]
async fn it_should_fail_the_scrape_and_report_a_fatal_error_when_the_upstream_answers_with_an_error_status() {
    let upstream = FakeOpentracker::responding(reqwest::StatusCode::SERVICE_UNAVAILABLE, "").await;
    let mut env = Environment::new(&upstream.addr.to_string()).await;

    let response = get(&env.url("metrics")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text().await.expect("it should have a body").contains("tracker_"));

    assert_fatal_was_reported(&mut env).await;

    env.stop().await;
}

#[tokio::test]
async fn it_should_fail_the_scrape_and_report_a_fatal_error_when_the_upstream_report_is_malformed() {
    let upstream = FakeOpentracker::serving(MALFORMED_REPORT).await;
    let mut env = Environment::new(&upstream.addr.to_string()).await;

    let response = get(&env.url("metrics")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text().await.expect("it should have a body").contains("tracker_"));

    assert_fatal_was_reported(&mut env).await;

    env.stop().await;
}

#[tokio::test]
async fn it_should_fail_the_scrape_and_report_a_fatal_error_when_the_upstream_is_unreachable() {
    let mut env = Environment::new(&unreachable_address().to_string()).await;

    let response = get(&env.url("metrics")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_fatal_was_reported(&mut env).await;

    env.stop().await;
}

#[tokio::test]
async fn health_check_endpoint_should_return_status_ok_without_contacting_the_upstream() {
    let upstream = FakeOpentracker::serving(EXAMPLE_REPORT).await;
    let env = Environment::new(&upstream.addr.to_string()).await;

    let response = get(&env.url("health_check")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("it should have a body");

    assert_eq!(
        serde_json::from_str::<Report>(&body).expect("it should be a health check report"),
        Report { status: Status::Ok }
    );
    assert_eq!(upstream.hits(), 0);

    env.stop().await;
}

#[test]
fn the_production_server_should_listen_on_the_exporter_port() {
    assert_eq!(app::METRICS_API_BIND_ADDRESS.port(), 9574);
    assert!(app::METRICS_API_BIND_ADDRESS.ip().is_unspecified());
}
