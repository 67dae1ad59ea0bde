//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt layer on stderr. The filter comes from
//! `ARTICLEVIEW_LOG` when set (e.g. `ARTICLEVIEW_LOG=articleview=debug`),
//! otherwise from the config file's `logging.filter`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "ARTICLEVIEW_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Picks the filter directive: env var first, then the configured one.
pub fn filter_directive(configured: &str) -> String {
    match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => configured.to_string(),
    }
}

/// Initializes logging once; later calls are ignored.
pub fn init(configured_filter: &str) {
    INIT.get_or_init(|| {
        let directive = filter_directive(configured_filter);
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("Invalid log filter '{}': {}, falling back to 'info'", directive, e);
            EnvFilter::new("info")
        });

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        // try_init fails if a global subscriber already exists (tests, embedding hosts).
        let _ = tracing_subscriber::registry()
            .with(stderr_layer)
            .with(filter)
            .try_init();

        tracing::debug!(filter = %directive, "logging initialized");
    });
}
