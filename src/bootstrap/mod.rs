//! Exporter bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! The exporter only runs one job: the metrics API server.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
