use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize stderr logging for binaries or tests embedding this crate.
///
/// `RUST_LOG` takes precedence when set; otherwise the level is `debug`
/// when `verbose`, `info` when not.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
