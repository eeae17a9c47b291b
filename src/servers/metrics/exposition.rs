//! Encoding of the measurements in the `OpenMetrics` text format.
//!
//! Families are written in catalog order. A family without instances, for
//! example `renew_total` for a report without renew entries, is left out.
//! Instances with repeated label values are written as separate samples.
use prometheus_client::collector::Collector;
use prometheus_client::encoding::{text, DescriptorEncoder, EncodeMetric, MetricEncoder};
use prometheus_client::metrics::counter::ConstCounter;
use prometheus_client::metrics::gauge::ConstGauge;
use prometheus_client::metrics::MetricType;
use prometheus_client::registry::Registry;

use crate::core::catalog::MetricKind;
use crate::core::collector::StatsCollector;
use crate::core::measurement::Measurement;

/// All the families are exposed under this prefix.
pub const METRIC_PREFIX: &str = "tracker";

/// # Errors
///
/// Will return an error if the text can not be written.
pub fn encode(measurements: &[Measurement]) -> Result<String, std::fmt::Error> {
    let mut registry = Registry::with_prefix(METRIC_PREFIX);

    registry.register_collector(Box::new(Scrape {
        measurements: measurements.to_vec(),
    }));

    let mut body = String::new();

    text::encode(&mut body, &registry)?;

    Ok(body)
}

/// The measurements of one scrape, ready to be written by the registry.
#[derive(Debug)]
struct Scrape {
    measurements: Vec<Measurement>,
}

impl Collector for Scrape {
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        for descriptor in StatsCollector::describe() {
            let instances: Vec<&Measurement> = self
                .measurements
                .iter()
                .filter(|measurement| measurement.descriptor.name == descriptor.name)
                .collect();

            if instances.is_empty() {
                continue;
            }

            let mut metric_encoder =
                encoder.encode_descriptor(descriptor.name, descriptor.help, None, metric_type(descriptor.kind))?;

            // An unlabeled family has a single instance.
            if let [single] = instances.as_slice() {
                if single.labels.is_empty() {
                    encode_value(descriptor.kind, single.value, metric_encoder)?;
                    continue;
                }
            }

            for measurement in instances {
                let family_encoder = metric_encoder.encode_family(&measurement.labels)?;
                encode_value(descriptor.kind, measurement.value, family_encoder)?;
            }
        }

        Ok(())
    }
}

fn metric_type(kind: MetricKind) -> MetricType {
    match kind {
        MetricKind::Counter => MetricType::Counter,
        MetricKind::Gauge => MetricType::Gauge,
    }
}

fn encode_value(kind: MetricKind, value: f64, encoder: MetricEncoder) -> Result<(), std::fmt::Error> {
    match kind {
        MetricKind::Counter => ConstCounter::new(value).encode(encoder),
        MetricKind::Gauge => ConstGauge::new(value).encode(encoder),
    }
}

#[cfg(test)]
mod tests {
    use opentracker_exporter_test_helpers::fixtures::{EXAMPLE_REPORT, FULL_REPORT};

    use super::encode;
    use crate::core::measurement::flatten;
    use crate::core::snapshot::UpstreamSnapshot;

    fn encoded(report: &str) -> String {
        let snapshot = UpstreamSnapshot::from_xml(report).expect("it should decode the report");

        encode(&flatten(&snapshot)).expect("it should encode the measurements")
    }

    fn samples(body: &str) -> Vec<&str> {
        body.lines().filter(|line| !line.starts_with('#')).collect()
    }

    #[test]
    fn it_should_expose_the_families_with_the_tracker_prefix() {
        let body = encoded(EXAMPLE_REPORT);

        assert!(body.contains("# TYPE tracker_uptime counter"));
        assert!(body.contains("# TYPE tracker_torrents gauge"));
        assert!(body.contains("tracker_uptime_total 12345"));
        assert!(body.contains("tracker_torrents 7"));
        assert!(body.contains("tracker_renew_total{interval=\"1800\"} 42"));
    }

    #[test]
    fn it_should_write_the_unlabeled_samples_without_a_label_set() {
        let body = encoded(FULL_REPORT);

        let labeled = ["tracker_connections_total{", "tracker_renew_total{", "tracker_http_error_total{"];

        let unlabeled: Vec<&str> = samples(&body)
            .into_iter()
            .filter(|line| !labeled.iter().any(|family| line.starts_with(family)))
            .collect();

        assert_eq!(unlabeled.len(), 7);
        assert!(unlabeled.iter().all(|line| !line.contains('{')), "{unlabeled:?}");
    }

    #[test]
    fn it_should_leave_out_the_families_without_instances() {
        let body = encoded(EXAMPLE_REPORT);

        assert!(!body.contains("tracker_http_error"));
    }

    #[test]
    fn it_should_write_one_sample_per_measurement() {
        let body = encoded(FULL_REPORT);

        assert_eq!(samples(&body).len(), 20);
    }

    #[test]
    fn it_should_write_the_connections_with_the_mismatch_label_spelled_right() {
        let body = encoded(FULL_REPORT);

        assert!(body.contains("tracker_connections_total{protocol=\"udp\",type=\"mismatch\"} 2005"));
        assert!(!body.contains("missmatch"));
    }

    #[test]
    fn it_should_write_repeated_renew_intervals_as_separate_samples() {
        let body = encoded(FULL_REPORT);

        let renews: Vec<&str> = samples(&body)
            .into_iter()
            .filter(|line| line.starts_with("tracker_renew_total"))
            .collect();

        assert_eq!(renews.len(), 3);
        assert!(renews[0].starts_with("tracker_renew_total{interval=\"1800\"} 11"));
        assert!(renews[1].starts_with("tracker_renew_total{interval=\"30\"} 12"));
        assert!(renews[2].starts_with("tracker_renew_total{interval=\"1800\"} 13"));
    }

    #[test]
    fn it_should_write_the_http_error_codes_verbatim() {
        let body = encoded(FULL_REPORT);

        assert!(body.contains("tracker_http_error_total{code=\"302 Redirect\"} 21"));
        assert!(body.contains("tracker_http_error_total{code=\"404 Not Found\"} 22"));
    }
}
