//! Tracing infrastructure for host applications embedding the widget.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mention_input=debug` - this crate only
//! - `RUST_LOG=mention_input::update=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize a console tracing subscriber filtered by RUST_LOG.
///
/// Falls back to `warn` when RUST_LOG is unset. Hosts that already install
/// their own subscriber should skip this and rely on their registry.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
