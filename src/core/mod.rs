//! The `core` module contains the exporter logic which is independent of the
//! delivery layer.
//!
//! It turns one opentracker statistics report into a flat list of typed and
//! labeled measurements. The metrics server is the only delivery layer:
//!
//! ```text
//! Upstream            Domain layer                                  Delivery layer
//!
//! opentracker  --->   fetch -> decode -> flatten -> [Measurement]  ---> GET /metrics
//! /stats?mode=everything
//! ```
//!
//! # Table of contents
//!
//! - [Snapshot](#snapshot)
//! - [Catalog](#catalog)
//! - [Collector](#collector)
//!
//! # Snapshot
//!
//! The [`UpstreamSnapshot`](snapshot::UpstreamSnapshot) is the decoded report.
//! It only lives for one scrape. Missing elements in the report are read as
//! zero, but a report that can not be decoded aborts the whole scrape.
//!
//! # Catalog
//!
//! The [`catalog`] is the fixed list of ten metrics the exporter can ever
//! expose, for example:
//!
//! Identifier | Kind | Labels
//! ---|---|---
//! `uptime_total` | counter |
//! `torrents` | gauge |
//! `connections_total` | counter | `protocol`, `type`
//! `renew_total` | counter | `interval`
//!
//! # Collector
//!
//! The [`StatsCollector`](collector::StatsCollector) runs one
//! fetch-decode-flatten cycle per call. It does not keep any state between
//! calls, so concurrent scrapes do not need any locking.
pub mod catalog;
pub mod collector;
pub mod error;
pub mod measurement;
pub mod snapshot;
