//! Telemetry setup for test binaries
//!
//! Mock metrics emit `tracing` events: `debug` for every recorded value and
//! `warn` for every rejected call. Call [`init`] at the top of a test to see
//! them.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize a tracing subscriber writing to the test output
///
/// This can only be called once per process. Subsequent calls are silently
/// ignored, so every test may call it. A subscriber installed elsewhere in the
/// process is left in place.
///
/// Reads the filter from RUST_LOG, defaulting to `default_level` for this
/// crate.
///
/// # Examples
///
/// ```
/// metric_doubles::telemetry::init("debug");
/// metric_doubles::MockCounter::default().add(1.0);
/// ```
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("metric_doubles={}", default_level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
