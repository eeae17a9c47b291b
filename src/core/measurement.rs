//! Flattening of a decoded report into measurements.
//!
//! For a report with `R` renew entries and `H` http error entries the
//! exporter always produces `15 + R + H` measurements, in this order:
//!
//! 1. The six basic stats: uptime, torrents, peers, seeds, completed and
//!    mutex stalls.
//! 2. Eight `connections_total` instances, one per
//!    [`CONNECTION_TYPES`] entry, even when the count is zero.
//! 3. The livesync connections.
//! 4. One `renew_total` instance per renew entry.
//! 5. One `http_error_total` instance per http error entry.
//!
//! Values are copied as they are. Counters are not reset or converted into
//! rates.
use super::catalog::{
    Descriptor, COMPLETED, CONNECTIONS, CONNECTIONS_LIVESYNC, CONNECTION_TYPES, HTTP_ERROR, MUTEX_STALL, PEERS, RENEW, SEEDS,
    TORRENTS, UPTIME,
};
use super::snapshot::UpstreamSnapshot;

/// One labeled value of a catalog family.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub descriptor: &'static Descriptor,
    /// `(label name, label value)` pairs, in the descriptor label order.
    pub labels: Vec<(&'static str, String)>,
    pub value: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(descriptor: &'static Descriptor, labels: Vec<(&'static str, String)>, value: f64) -> Self {
        Self {
            descriptor,
            labels,
            value,
        }
    }

    #[must_use]
    pub fn unlabeled(descriptor: &'static Descriptor, value: f64) -> Self {
        Self::new(descriptor, Vec::new(), value)
    }

    /// The value of the label with the given name, if any.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Builds all the measurements for one snapshot.
#[must_use]
pub fn flatten(snapshot: &UpstreamSnapshot) -> Vec<Measurement> {
    let mut measurements =
        Vec::with_capacity(6 + CONNECTION_TYPES.len() + 1 + snapshot.renew_entries.len() + snapshot.http_error_entries.len());

    // basic stats
    measurements.push(Measurement::unlabeled(&UPTIME, snapshot.uptime));
    measurements.push(Measurement::unlabeled(&TORRENTS, snapshot.torrent_count));
    measurements.push(Measurement::unlabeled(&PEERS, snapshot.peer_count));
    measurements.push(Measurement::unlabeled(&SEEDS, snapshot.seed_count));
    measurements.push(Measurement::unlabeled(&COMPLETED, snapshot.completed_count));
    measurements.push(Measurement::unlabeled(&MUTEX_STALL, snapshot.mutex_stall_count));

    // connection stats
    let tcp = &snapshot.connections.tcp;
    let udp = &snapshot.connections.udp;

    let counts = [
        tcp.accept,
        tcp.announce,
        tcp.scrape,
        udp.overall,
        udp.connect,
        udp.announce,
        udp.scrape,
        udp.mismatch,
    ];

    for ((protocol, request_type), value) in CONNECTION_TYPES.iter().zip(counts) {
        measurements.push(Measurement::new(
            &CONNECTIONS,
            vec![("protocol", (*protocol).to_owned()), ("type", (*request_type).to_owned())],
            value,
        ));
    }

    measurements.push(Measurement::unlabeled(
        &CONNECTIONS_LIVESYNC,
        snapshot.connections.livesync_count,
    ));

    // debug stats
    for renew in &snapshot.renew_entries {
        measurements.push(Measurement::new(&RENEW, vec![("interval", renew.interval.to_string())], renew.count));
    }

    for http_error in &snapshot.http_error_entries {
        measurements.push(Measurement::new(
            &HTTP_ERROR,
            vec![("code", http_error.code.clone())],
            http_error.count,
        ));
    }

    measurements
}
