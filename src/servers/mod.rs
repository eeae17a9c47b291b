//! Servers. Services that can be started and stopped.
pub mod logging;
pub mod metrics;
pub mod signals;
