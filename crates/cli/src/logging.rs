//! Logging setup.
//!
//! Responsibilities:
//! - Install the global `tracing` subscriber writing to STDERR.
//! - Honour `RUST_LOG`, falling back to `info`.
//!
//! Invariants:
//! - Logs never go to stdout; stdout is reserved for command results.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging. `json` switches to one JSON object per line.
pub(crate) fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
