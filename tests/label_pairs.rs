//! Integration tests for name/value paired labels
//!
//! With `LabelStyle::Pairs` the schema is checked by name and position, and
//! only the values end up in the storage key.

use metric_doubles::{
    FailureRecorder, LabelStyle, LabelTuple, MetricConfig, MockCounter, MockGauge, MockHistogram,
};

fn paired(schema: &[&str], recorder: &FailureRecorder) -> MetricConfig {
    MetricConfig::new()
        .with_label_style(LabelStyle::Pairs)
        .expect_labels(schema.iter().copied())
        .with_handler(recorder.handler())
}

#[test]
fn test_pairs_matching_schema_records_values_only() {
    let recorder = FailureRecorder::new();
    let counter = MockCounter::new(paired(&["one", "two"], &recorder));

    counter.with(&["one", "a", "two", "b"]).add(1.0);

    assert!(recorder.is_empty());
    assert_eq!(counter.get("a.b"), Some(1.0));
}

#[test]
fn test_pairs_chained_equals_single_call() {
    let recorder = FailureRecorder::new();
    let counter = MockCounter::new(paired(&["one", "two"], &recorder));

    let chained = counter.with(&["one", "a"]).with(&["two", "b"]);
    let single = counter.with(&["one", "a", "two", "b"]);
    assert_eq!(chained.labels(), single.labels());

    chained.add(1.0);
    single.add(1.0);

    assert!(recorder.is_empty());
    assert_eq!(counter.get("a.b"), Some(2.0));
}

#[test]
fn test_pairs_labels_are_exposed_in_order() {
    let counter = MockCounter::new(MetricConfig::new().with_label_style(LabelStyle::Pairs));
    let derived = counter.with(&["method", "GET"]).with(&["status", "200"]);
    assert_eq!(
        derived.labels(),
        &[
            LabelTuple::new("method", "GET"),
            LabelTuple::new("status", "200"),
        ]
    );
}

#[test]
fn test_pairs_reject_swapped_names() {
    let recorder = FailureRecorder::new();
    let gauge = MockGauge::new(paired(&["one", "two"], &recorder));

    let detached = gauge.with(&["two", "a", "one", "b"]);

    assert!(detached.is_detached());
    assert_eq!(recorder.count(), 1);
    assert!(
        recorder.failures()[0]
            .to_string()
            .contains("the labels do not match")
    );
}

#[test]
fn test_pairs_reject_wrong_first_name_before_completion() {
    let recorder = FailureRecorder::new();
    let gauge = MockGauge::new(paired(&["one", "two"], &recorder));

    assert!(gauge.with(&["nope", "a"]).is_detached());
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_pairs_reject_odd_argument_count() {
    let recorder = FailureRecorder::new();
    let histogram = MockHistogram::new(paired(&["one"], &recorder));

    histogram.with(&["one"]).observe(1.0);

    assert_eq!(recorder.count(), 1);
    assert!(recorder.failures()[0].to_string().contains("multiple of 2"));
    assert!(histogram.value().is_empty());
}

#[test]
fn test_pairs_reject_empty_name_or_value() {
    let recorder = FailureRecorder::new();
    let histogram = MockHistogram::new(
        MetricConfig::new()
            .with_label_style(LabelStyle::Pairs)
            .with_handler(recorder.handler()),
    );

    histogram.with(&["", "a"]).observe(1.0);
    histogram.with(&["one", ""]).observe(1.0);

    assert_eq!(recorder.count(), 2);
    assert!(histogram.value().is_empty());
}

#[test]
fn test_pairs_without_schema_accept_any_names() {
    let histogram = MockHistogram::new(MetricConfig::new().with_label_style(LabelStyle::Pairs));
    histogram.with(&["anything", "x", "else", "y"]).observe(2.0);
    assert_eq!(histogram.get("x.y"), Some(vec![2.0]));
}

#[test]
fn test_pairs_incomplete_chain_fails_on_update() {
    let recorder = FailureRecorder::new();
    let counter = MockCounter::new(paired(&["one", "two"], &recorder));

    let partial = counter.with(&["one", "a"]);
    assert!(!partial.is_detached());

    partial.add(1.0);

    assert_eq!(recorder.count(), 1);
    assert!(recorder.failures()[0].is_invalid_labels());
    assert!(counter.value().is_empty());
}

#[test]
fn test_pairs_empty_schema_allows_only_bare_root() {
    let recorder = FailureRecorder::new();
    let counter = MockCounter::new(paired(&[], &recorder));

    counter.add(1.0);
    counter.with(&["one", "a"]).add(1.0);

    assert_eq!(recorder.count(), 1);
    assert_eq!(counter.get(""), Some(1.0));
    assert_eq!(counter.value().len(), 1);
}
