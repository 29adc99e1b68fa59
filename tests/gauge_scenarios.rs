//! Integration tests for MockGauge

use metric_doubles::{FailureRecorder, MetricConfig, MockGauge};
use std::collections::HashMap;

fn expected(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_gauge_with_no_labels() {
    let gauge = MockGauge::default();
    gauge.add(1.0);
    assert_eq!(gauge.value(), expected(&[("", 1.0)]));
}

#[test]
fn test_gauge_with_labels_in_one_call() {
    let gauge = MockGauge::default();
    gauge.with(&["label1", "label2"]).add(1.0);
    assert_eq!(gauge.value(), expected(&[("label1.label2", 1.0)]));
}

#[test]
fn test_gauge_set_then_add_across_keys() {
    let gauge = MockGauge::default();
    gauge.with(&["label1"]).with(&["label2"]).with(&["label3"]).add(1.0);
    gauge.with(&["label7"]).with(&["label2"]).with(&["label9"]).set(99.0);
    gauge.with(&["label7"]).with(&["label2"]).with(&["label9"]).add(1.0);

    assert_eq!(
        gauge.value(),
        expected(&[("label1.label2.label3", 1.0), ("label7.label2.label9", 100.0)])
    );
}

#[test]
fn test_gauge_custom_delimiter_set_then_add() {
    let gauge = MockGauge::new(MetricConfig::new().with_delimiter("-"));
    gauge.with(&["a"]).with(&["b"]).set(5.0);
    gauge.with(&["a"]).with(&["b"]).add(3.0);
    assert_eq!(gauge.value(), expected(&[("a-b", 8.0)]));
}

#[test]
fn test_empty_gauge_has_no_entries() {
    assert!(MockGauge::default().value().is_empty());
}

#[test]
fn test_gauge_custom_failure_handler_with_unexpected_label() {
    let gauge = MockGauge::new(
        MetricConfig::new()
            .with_failure_handler(|_| {})
            .expect_labels(Vec::<String>::new()),
    );
    gauge.with(&["label1"]).add(-1.0);
    assert!(gauge.value().is_empty());
}

#[test]
#[should_panic(expected = "labelValues is invalid")]
fn test_gauge_unexpected_label_panics() {
    MockGauge::new(MetricConfig::new().expect_labels(Vec::<String>::new()))
        .with(&["invalid"])
        .add(1.0);
}

#[test]
fn test_gauge_requires_two_labels() {
    let gauge = MockGauge::new(MetricConfig::new().expect_labels(["one", "two"]));
    gauge.with(&["label1", "label2"]).add(1.0);
    assert_eq!(gauge.value(), expected(&[("label1.label2", 1.0)]));
}

#[test]
fn test_gauge_wrong_arity_is_reported_for_set_and_add() {
    let recorder = FailureRecorder::new();
    let gauge = MockGauge::new(
        MetricConfig::new()
            .expect_labels(["one", "two"])
            .with_handler(recorder.handler()),
    );

    gauge.with(&["label1"]).set(1.0);
    gauge.with(&["label1"]).add(1.0);

    assert_eq!(recorder.count(), 2);
    assert!(gauge.value().is_empty());
}

#[test]
#[should_panic(expected = "labelValues is invalid")]
fn test_gauge_extra_label_panics() {
    MockGauge::new(MetricConfig::new().expect_labels(["one", "two"]))
        .with(&["label1", "label2", "label3"])
        .add(1.0);
}
