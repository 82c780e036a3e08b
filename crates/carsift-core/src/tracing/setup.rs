//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the carsift logging system with default settings.
///
/// Reads the `CARSIFT_LOG` environment variable for per-crate log levels.
/// Format: `CARSIFT_LOG=carsift_catalog=debug,carsift_ranking=info`
///
/// Falls back to `carsift=info` if `CARSIFT_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize from an [`ObservabilityConfig`].
///
/// The environment variable named by `log_env_var` wins; otherwise every
/// carsift crate logs at `log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(&config.log_env_var)
        .unwrap_or_else(|_| EnvFilter::new(format!("carsift={}", config.log_level)));
    install(filter);
}

/// Initialize with an explicit filter directive (for tests or embedding hosts).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A host may already have installed a global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
