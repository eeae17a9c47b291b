//! Opentracker upstream access.
//!
//! Opentracker exposes its statistics on the same port it serves announces on,
//! under the `stats` path. The exporter always requests the `everything` mode,
//! which returns the XML report described in
//! [`snapshot`](crate::core::snapshot).
pub mod client;

/// Target for the upstream logs.
pub const UPSTREAM_LOG_TARGET: &str = "UPSTREAM";
