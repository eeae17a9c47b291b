//! The `StatsCollector` runs one scrape cycle:
//!
//! ```text
//! fetch report -> decode snapshot -> flatten measurements
//! ```
//!
//! Any fetch or decode error aborts the cycle before a single measurement is
//! built, so callers either get the complete list or nothing.
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use super::catalog::{Descriptor, CATALOG};
use super::error::Error;
use super::measurement::{flatten, Measurement};
use super::snapshot::UpstreamSnapshot;

/// Something that can provide the raw `stats?mode=everything` report.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait StatsSource: Sync + Send {
    /// Performs one request for the full report and returns its body.
    async fn fetch_report(&self) -> Result<String, Error>;
}

/// It's built once at startup and shared by all the scrape requests. It does
/// not hold any mutable state.
#[derive(Clone)]
pub struct StatsCollector {
    source: Arc<dyn StatsSource>,
}

impl StatsCollector {
    #[must_use]
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    /// The families this collector can ever expose, independent of any report.
    #[must_use]
    pub fn describe() -> &'static [&'static Descriptor] {
        &CATALOG
    }

    /// Fetches a fresh report and flattens it into measurements.
    ///
    /// # Errors
    ///
    /// Will return an error if the report can not be fetched or decoded.
    pub async fn collect(&self) -> Result<Vec<Measurement>, Error> {
        let report = self.source.fetch_report().await?;

        let snapshot = UpstreamSnapshot::from_xml(&report).map_err(|source| Error::UnableToDecodeReport { source })?;

        let measurements = flatten(&snapshot);

        debug!("collected {} measurements", measurements.len());

        Ok(measurements)
    }
}
