//! Unified logging initialization for tests.
//!
//! Tests call `init()` as many times as they like; only the first call
//! installs a subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,backend=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_test_writer();

    // Ignore the error if a subscriber is already set.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
