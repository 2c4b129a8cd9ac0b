//! Tracing subscriber setup.
//!
//! Log verbosity is controlled with `RUST_LOG`; the default keeps the
//! tool quiet at `warn`. Logs go to stderr so stdout stays reserved for
//! command output consumed by the deployment driver.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// Safe to call exactly once, at process start.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
