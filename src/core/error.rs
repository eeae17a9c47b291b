//! Errors returned by the core [`StatsCollector`](crate::core::collector::StatsCollector).
//!
//! Error | Context | Description
//! ---|---|---
//! `InvalidUpstreamAddress` | Setup | The configured address can not be the authority of the stats url.
//! `UnableToConnect` | Transport | The upstream tracker could not be reached, or the request failed.
//! `UnexpectedStatus` | Transport | The upstream tracker answered with a non-success status code.
//! `UnableToReadBody` | Transport | The response body could not be read completely.
//! `UnableToDecodeReport` | Parse | The response body is not a well-formed statistics report.
//!
//! All the scrape errors abort the scrape. None of them are retried.
use reqwest::StatusCode;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The upstream address: {address}, can not be used to build the stats url: {source}")]
    InvalidUpstreamAddress { address: String, source: url::ParseError },

    #[error("Unable to connect to the upstream tracker at: {url}: {source}")]
    UnableToConnect { url: Url, source: reqwest::Error },

    #[error("The upstream tracker at: {url}, responded with status: {status}")]
    UnexpectedStatus { url: Url, status: StatusCode },

    #[error("Unable to read the upstream response body from: {url}: {source}")]
    UnableToReadBody { url: Url, source: reqwest::Error },

    #[error("Unable to decode the upstream stats report: {source}")]
    UnableToDecodeReport { source: quick_xml::DeError },
}
