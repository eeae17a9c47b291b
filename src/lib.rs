//! **Opentracker exporter** is a [Prometheus](https://prometheus.io/) exporter
//! for the statistics of an [opentracker](https://erdgeist.org/arts/software/opentracker/)
//! `BitTorrent` tracker.
//!
//! # Table of contents
//!
//! - [Usage](#usage)
//! - [Metrics](#metrics)
//! - [Components](#components)
//!
//! # Usage
//!
//! ```text
//! OPENTRACKER_URL=127.0.0.1:6969 cargo run
//! ```
//!
//! The exporter listens on `0.0.0.0:9574`. Every `GET /metrics` request makes
//! exactly one request to `http://<OPENTRACKER_URL>/stats?mode=everything`
//! and translates the XML report into `OpenMetrics` families.
//!
//! If the upstream tracker can not be reached, answers with a non-success
//! status or serves a report that can not be decoded, the scrape fails and the
//! exporter terminates with a non-zero exit code. Restarting it is left to the
//! process supervisor.
//!
//! # Metrics
//!
//! All families have the `tracker_` prefix.
//!
//! Family                               | Type    | Labels
//! -------------------------------------|---------|-------------------
//! `tracker_uptime_total`               | counter |
//! `tracker_torrents`                   | gauge   |
//! `tracker_peers`                      | gauge   |
//! `tracker_seeds`                      | gauge   |
//! `tracker_completed_total`            | counter |
//! `tracker_mutex_stall_total`          | counter |
//! `tracker_connections_total`          | counter | `protocol`, `type`
//! `tracker_connections_livesync_total` | counter |
//! `tracker_renew_total`                | counter | `interval`
//! `tracker_http_error_total`           | counter | `code`
//!
//! # Components
//!
//! - [`core`]: the report decoding, the metrics catalog and the collector.
//! - [`shared::opentracker`]: the HTTP client for the upstream tracker.
//! - [`servers::metrics`]: the HTTP server exposing the metrics.
//! - [`bootstrap`] and [`app`]: configuration, logging and jobs.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
pub mod shared;
