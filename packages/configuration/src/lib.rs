//! Configuration data structures for the opentracker exporter.
//!
//! The exporter is configured only from the process environment:
//!
//! - `OPENTRACKER_URL` (**required**): the `host:port` of the upstream
//!   opentracker daemon. The exporter fetches
//!   `http://<OPENTRACKER_URL>/stats?mode=everything` on every scrape.
//! - `OPENTRACKER_EXPORTER_LOGGING__THRESHOLD` (optional): the logging
//!   threshold. See [`Threshold`].
//!
//! For example:
//!
//! ```text
//! OPENTRACKER_URL=127.0.0.1:6969 \
//! OPENTRACKER_EXPORTER_LOGGING__THRESHOLD=debug \
//! cargo run
//! ```
//!
//! The metrics endpoint listening port is not configurable.
pub mod logging;
pub mod upstream;
pub mod validator;

use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::logging::{Logging, Threshold};
pub use self::upstream::Upstream;
use self::validator::{SemanticValidationError, Validator};

/// The environment variable holding the upstream tracker address.
pub const ENV_VAR_UPSTREAM_ADDRESS: &str = "OPENTRACKER_URL";

/// Prefix for the optional settings, nested sections are split with `__`.
pub const ENV_VAR_PREFIX: &str = "OPENTRACKER_EXPORTER_";

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment does not contain a usable configuration, for example
    /// when `OPENTRACKER_URL` is not set.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: Box<figment::Error> },

    #[error("Invalid configuration: {source}")]
    Invalid { source: SemanticValidationError },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Box::new(err) }
    }
}

impl From<SemanticValidationError> for Error {
    fn from(err: SemanticValidationError) -> Self {
        Self::Invalid { source: err }
    }
}

/// Core configuration for the exporter.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Configuration {
    /// The upstream opentracker daemon.
    pub upstream: Upstream,

    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,
}

impl Configuration {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `OPENTRACKER_URL` is missing or empty, or if any
    /// optional setting has an invalid value.
    pub fn load_from_env() -> Result<Configuration, Error> {
        Self::load(Self::figment())
    }

    /// Extracts and validates the configuration from the given providers.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the providers do not yield a valid configuration.
    pub fn load(figment: Figment) -> Result<Configuration, Error> {
        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// The providers used to build the configuration from the environment.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&[ENV_VAR_UPSTREAM_ADDRESS])
                    .map(|_| "upstream.address".into()),
            )
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        self.upstream.validate()
    }
}

#[cfg(test)]
mod tests {
    use figment::providers::Serialized;
    use figment::Figment;

    use crate::validator::SemanticValidationError;
    use crate::{Configuration, Error, Threshold};

    #[test]
    fn configuration_should_be_loaded_from_the_upstream_address_env_var() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OPENTRACKER_URL", "127.0.0.1:6969");

            let configuration = Configuration::load_from_env().expect("it should load the configuration");

            assert_eq!(configuration.upstream.address, "127.0.0.1:6969");
            assert_eq!(configuration.logging.threshold, Threshold::Info);

            Ok(())
        });
    }

    #[test]
    fn configuration_should_allow_to_overwrite_the_logging_threshold() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("OPENTRACKER_URL", "tracker.example.org:6969");
            jail.set_env("OPENTRACKER_EXPORTER_LOGGING__THRESHOLD", "debug");

            let configuration = Configuration::load_from_env().expect("it should load the configuration");

            assert_eq!(configuration.logging.threshold, Threshold::Debug);

            Ok(())
        });
    }

    #[test]
    fn configuration_should_fail_without_an_upstream_address() {
        let result = Configuration::load(Figment::new());

        assert!(matches!(result, Err(Error::ConfigError { .. })));
    }

    #[test]
    fn configuration_should_fail_with_an_empty_upstream_address() {
        let figment = Figment::from(Serialized::default("upstream.address", ""));

        let result = Configuration::load(figment);

        assert!(matches!(
            result,
            Err(Error::Invalid {
                source: SemanticValidationError::EmptyUpstreamAddress
            })
        ));
    }
}
