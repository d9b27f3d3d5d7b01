//! Tracing initialization and configuration.

pub mod spans;

pub use spans::names;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsrec_core::config::ObservabilityConfig;
use newsrec_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing with the `info` level and plain-text output.
///
/// Reads the `NEWSREC_LOG` environment variable for per-crate log levels.
/// Format: `NEWSREC_LOG=newsrec_selection=debug,newsrec_session=info`
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `NEWSREC_LOG` overrides `log_level`.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        if result.is_err() {
            // A global subscriber installed by the host wins.
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
