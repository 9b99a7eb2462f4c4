//! Tracing setup for binaries and integration tests.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,bookline_core=debug,bookline_infra=debug";

/// Initialise the global tracing subscriber.
///
/// Respects `RUST_LOG` when set. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
