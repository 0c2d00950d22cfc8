//! Tracing subscriber setup for binaries and integration harnesses.

use tracing_subscriber::EnvFilter;

use crate::config;

/// Install the global tracing subscriber. Honors RUST_LOG; falls back to
/// the crate default filter. Safe to call more than once (subsequent
/// calls are no-ops).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::info!("{} v{} logging initialized", config::APP_NAME, config::APP_VERSION);
}
