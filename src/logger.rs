//! Diagnostic logging to stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    #[cfg(target_os = "windows")]
    let builder = builder.with_ansi(false);

    // A subscriber may already be installed when embedded; keep it.
    let _ = builder.try_init();
}
