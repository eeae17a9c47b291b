//! Initialize configuration from env vars.
//!
//! The upstream address is read from `OPENTRACKER_URL`. Optional settings are
//! prefixed with `OPENTRACKER_EXPORTER_`.
use opentracker_exporter_configuration::Configuration;

/// It loads the application configuration from the environment.
///
/// Refer to the [configuration crate documentation](opentracker_exporter_configuration)
/// for the configuration options.
///
/// # Panics
///
/// Will panic if `OPENTRACKER_URL` is not set, is empty, or is not a valid
/// `host:port`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    match Configuration::load_from_env() {
        Ok(configuration) => configuration,
        Err(err) => panic!("Unable to load the configuration from the environment: {err}"),
    }
}
