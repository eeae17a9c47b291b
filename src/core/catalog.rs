//! The fixed catalog of metrics the exporter can expose.
//!
//! The catalog does not depend on any report. It's the same for every scrape
//! and it never changes at runtime.
//!
//! The exposed names get the `tracker_` prefix, so `uptime_total` is scraped
//! as `tracker_uptime_total`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetricKind {
    /// Monotonically non-decreasing over the upstream lifetime.
    Counter,
    /// A current value that can go up and down.
    Gauge,
}

/// The static description of one metric family.
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// The family name without the `_total` suffix of counters.
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    /// The label names every instance of this family carries.
    pub labels: &'static [&'static str],
}

impl Descriptor {
    /// The identifier the family is exposed with (before the `tracker_`
    /// prefix). Counters end with `_total`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self.kind {
            MetricKind::Counter => format!("{}_total", self.name),
            MetricKind::Gauge => self.name.to_owned(),
        }
    }
}

pub static UPTIME: Descriptor = Descriptor {
    name: "uptime",
    help: "Seconds the tracker has been up",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static TORRENTS: Descriptor = Descriptor {
    name: "torrents",
    help: "Number of tracked torrents",
    kind: MetricKind::Gauge,
    labels: &[],
};

pub static PEERS: Descriptor = Descriptor {
    name: "peers",
    help: "Number of known peers",
    kind: MetricKind::Gauge,
    labels: &[],
};

pub static SEEDS: Descriptor = Descriptor {
    name: "seeds",
    help: "Number of known seeds",
    kind: MetricKind::Gauge,
    labels: &[],
};

pub static COMPLETED: Descriptor = Descriptor {
    name: "completed",
    help: "Number of completed downloads",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static MUTEX_STALL: Descriptor = Descriptor {
    name: "mutex_stall",
    help: "Number of lock contention stalls",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static CONNECTIONS: Descriptor = Descriptor {
    name: "connections",
    help: "Number of handled requests by protocol and request type",
    kind: MetricKind::Counter,
    labels: &["protocol", "type"],
};

pub static CONNECTIONS_LIVESYNC: Descriptor = Descriptor {
    name: "connections_livesync",
    help: "Number of livesync connections",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static RENEW: Descriptor = Descriptor {
    name: "renew",
    help: "Number of renews at a specific interval",
    kind: MetricKind::Counter,
    labels: &["interval"],
};

pub static HTTP_ERROR: Descriptor = Descriptor {
    name: "http_error",
    help: "Number of http errors by status code",
    kind: MetricKind::Counter,
    labels: &["code"],
};

/// All the families, in the order they are exposed.
pub static CATALOG: [&Descriptor; 10] = [
    &UPTIME,
    &TORRENTS,
    &PEERS,
    &SEEDS,
    &COMPLETED,
    &MUTEX_STALL,
    &CONNECTIONS,
    &CONNECTIONS_LIVESYNC,
    &RENEW,
    &HTTP_ERROR,
];

/// The `(protocol, type)` label values of the `connections_total` instances,
/// in the order they are emitted.
///
/// The upstream `missmatch` counter is exposed as `mismatch`.
pub const CONNECTION_TYPES: [(&str, &str); 8] = [
    ("tcp", "accept"),
    ("tcp", "announce"),
    ("tcp", "scrape"),
    ("udp", "overall"),
    ("udp", "connect"),
    ("udp", "announce"),
    ("udp", "scrape"),
    ("udp", "mismatch"),
];
