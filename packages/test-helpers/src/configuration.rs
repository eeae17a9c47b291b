use opentracker_exporter_configuration::{Configuration, Logging, Threshold, Upstream};

/// This configuration is used for testing. It points the exporter to the
/// given upstream address and keeps the logs quiet.
#[must_use]
pub fn ephemeral(upstream_address: &str) -> Configuration {
    Configuration {
        upstream: Upstream {
            address: upstream_address.to_owned(),
        },
        logging: Logging {
            threshold: Threshold::Off, // Change to `Debug` for tests debugging
        },
    }
}
