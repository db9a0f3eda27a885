//! Log subscriber setup.
//!
//! `RUST_LOG` always wins; otherwise the `-v` count picks the default
//! filter level. HTTP request/response logs come from tower-http's
//! `TraceLayer` at debug level, so `-vv` shows per-request traffic.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
pub fn init(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
