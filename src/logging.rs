//! Tracing setup shared by the driver binaries.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`
/// (default `info`). Driver output stays on stdout. Calling this twice is
/// harmless; the second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
