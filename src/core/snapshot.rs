//! The decoded opentracker statistics report.
//!
//! Opentracker serves its statistics as XML when the `everything` mode is
//! requested:
//!
//! ```text
//! <stats>
//!   <uptime>12345</uptime>
//!   <torrents><count_mutex>7</count_mutex></torrents>
//!   <peers><count>120</count></peers>
//!   ...
//!   <connections>
//!     <tcp><accept>1</accept><announce>2</announce><scrape>3</scrape></tcp>
//!     <udp>...<missmatch>5</missmatch></udp>
//!     <livesync><count>0</count></livesync>
//!   </connections>
//!   <debug>
//!     <renew><count interval="00001800">42</count>...</renew>
//!     <http_error><count code="302 Redirect">0</count>...</http_error>
//!     <mutex_stall><count>0</count></mutex_stall>
//!   </debug>
//! </stats>
//! ```
//!
//! Every element is optional. A missing element, or an element without text,
//! is read as zero. Elements the exporter does not use are ignored.
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// One fully decoded report. It's built and dropped within one scrape.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpstreamSnapshot {
    /// Seconds since the tracker process started.
    pub uptime: f64,
    pub torrent_count: f64,
    pub peer_count: f64,
    pub seed_count: f64,
    /// Cumulative number of completed downloads.
    pub completed_count: f64,
    pub connections: Connections,
    /// Renew events by announce interval, in report order.
    pub renew_entries: Vec<RenewEntry>,
    /// Http error responses by status code, in report order.
    pub http_error_entries: Vec<HttpErrorEntry>,
    pub mutex_stall_count: f64,
}

impl UpstreamSnapshot {
    /// Decodes the XML body of a `stats?mode=everything` response.
    ///
    /// # Errors
    ///
    /// Will return an error if the body is not well-formed XML or if any
    /// element the exporter reads does not contain a number.
    pub fn from_xml(report: &str) -> Result<Self, quick_xml::DeError> {
        let report: Report = quick_xml::de::from_str(report)?;

        Ok(report.into())
    }
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Connections {
    pub tcp: TcpConnections,
    pub udp: UdpConnections,
    #[serde(rename = "livesync", deserialize_with = "single_count")]
    pub livesync_count: f64,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TcpConnections {
    #[serde(deserialize_with = "number")]
    pub accept: f64,
    #[serde(deserialize_with = "number")]
    pub announce: f64,
    #[serde(deserialize_with = "number")]
    pub scrape: f64,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct UdpConnections {
    #[serde(deserialize_with = "number")]
    pub overall: f64,
    #[serde(deserialize_with = "number")]
    pub connect: f64,
    #[serde(deserialize_with = "number")]
    pub announce: f64,
    #[serde(deserialize_with = "number")]
    pub scrape: f64,
    /// Opentracker spells this element `missmatch`.
    #[serde(rename = "missmatch", deserialize_with = "number")]
    pub mismatch: f64,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RenewEntry {
    /// The announce interval in seconds. The tracker pads it with zeros.
    #[serde(rename = "@interval", deserialize_with = "integer")]
    pub interval: i64,
    #[serde(rename = "$text", deserialize_with = "number")]
    pub count: f64,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct HttpErrorEntry {
    /// The status line, for example `404 Not Found`.
    #[serde(rename = "@code")]
    pub code: String,
    #[serde(rename = "$text", deserialize_with = "number")]
    pub count: f64,
}

/// The `<stats>` root element.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Report {
    #[serde(deserialize_with = "number")]
    uptime: f64,
    torrents: TorrentStats,
    #[serde(deserialize_with = "single_count")]
    peers: f64,
    #[serde(deserialize_with = "single_count")]
    seeds: f64,
    #[serde(deserialize_with = "single_count")]
    completed: f64,
    connections: Connections,
    debug: DebugStats,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct TorrentStats {
    #[serde(deserialize_with = "number")]
    count_mutex: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct DebugStats {
    renew: Renew,
    http_error: HttpError,
    #[serde(deserialize_with = "single_count")]
    mutex_stall: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Renew {
    count: Vec<RenewEntry>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct HttpError {
    count: Vec<HttpErrorEntry>,
}

/// An element wrapping a single `<count>` child.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Count {
    #[serde(deserialize_with = "number")]
    count: f64,
}

impl From<Report> for UpstreamSnapshot {
    fn from(report: Report) -> Self {
        Self {
            uptime: report.uptime,
            torrent_count: report.torrents.count_mutex,
            peer_count: report.peers,
            seed_count: report.seeds,
            completed_count: report.completed,
            connections: report.connections,
            renew_entries: report.debug.renew.count,
            http_error_entries: report.debug.http_error.count,
            mutex_stall_count: report.debug.mutex_stall,
        }
    }
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();

    if text.is_empty() {
        return Ok(0.0);
    }

    text.parse::<f64>()
        .map_err(|err| de::Error::custom(format!("invalid number `{text}`: {err}")))
}

fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();

    if text.is_empty() {
        return Ok(0);
    }

    text.parse::<i64>()
        .map_err(|err| de::Error::custom(format!("invalid integer `{text}`: {err}")))
}

fn single_count<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Count::deserialize(deserializer)?.count)
}
