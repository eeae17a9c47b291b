use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use tracing::{debug, warn};

use super::UPSTREAM_LOG_TARGET;
use crate::core::collector::StatsSource;
use crate::core::error::Error;

/// Opentracker stats client.
///
/// URL components in this context:
///
/// ```text
/// http://127.0.0.1:6969/stats?mode=everything
/// \___________________/\____/ \_____________/
///           |             |           |
///    upstream address   path        query
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    stats_url: Url,
    reqwest: ReqwestClient,
}

impl Client {
    /// Creates a client for the tracker listening on `address` (`host:port`).
    ///
    /// No request timeout is set, the transport defaults apply.
    ///
    /// # Errors
    ///
    /// Will return an error if the address can not be used as the authority of
    /// an `http` url.
    pub fn new(address: &str) -> Result<Self, Error> {
        let mut stats_url = Url::parse(&format!("http://{address}/stats")).map_err(|source| Error::InvalidUpstreamAddress {
            address: address.to_owned(),
            source,
        })?;

        stats_url.query_pairs_mut().append_pair("mode", "everything");

        Ok(Self {
            stats_url,
            reqwest: ReqwestClient::new(),
        })
    }

    #[must_use]
    pub fn stats_url(&self) -> &Url {
        &self.stats_url
    }
}

#[async_trait]
impl StatsSource for Client {
    async fn fetch_report(&self) -> Result<String, Error> {
        let url = self.stats_url.clone();

        debug!(target: UPSTREAM_LOG_TARGET, %url, "fetching stats report");

        let response = self
            .reqwest
            .get(url.clone())
            .send()
            .await
            .map_err(|source| Error::UnableToConnect { url: url.clone(), source })?;

        let status = response.status();

        if !status.is_success() {
            warn!(target: UPSTREAM_LOG_TARGET, %url, %status, "unexpected stats response status");
            return Err(Error::UnexpectedStatus { url, status });
        }

        let report = response
            .text()
            .await
            .map_err(|source| Error::UnableToReadBody { url, source })?;

        debug!(target: UPSTREAM_LOG_TARGET, bytes = report.len(), "stats report received");

        Ok(report)
    }
}
