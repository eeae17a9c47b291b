//! Setup for the main exporter application.
//!
//! The [`setup`] function builds the only domain service, the
//! [`StatsCollector`], from the environment configuration.
//!
//! Setup steps:
//!
//! 1. Load the configuration from the environment.
//! 2. Initialize logging.
//! 3. Build the upstream client and the collector on top of it.
use std::sync::Arc;

use opentracker_exporter_configuration::Configuration;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::collector::StatsCollector;
use crate::core::error::Error;
use crate::shared::opentracker::client::Client;

/// It loads the configuration and builds the collector.
///
/// # Panics
///
/// Setup can fail if the configuration is missing or invalid.
#[must_use]
pub fn setup() -> (Configuration, StatsCollector) {
    let configuration = initialize_configuration();

    initialize_logging(&configuration);

    match collector(&configuration) {
        Ok(collector) => (configuration, collector),
        Err(err) => panic!("Unable to build the stats collector: {err}"),
    }
}

/// Builds the collector for the configured upstream tracker.
///
/// # Errors
///
/// Will return an error if the upstream address does not form a valid url.
pub fn collector(configuration: &Configuration) -> Result<StatsCollector, Error> {
    let client = Client::new(&configuration.upstream.address)?;

    info!("Exporting stats from: {}", client.stats_url());

    Ok(StatsCollector::new(Arc::new(client)))
}

/// It initializes the application logging.
pub fn initialize_logging(configuration: &Configuration) {
    bootstrap::logging::setup(configuration);
}
