//! Helpers shared by the opentracker exporter tests.
pub mod configuration;
pub mod fixtures;
