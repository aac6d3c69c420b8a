//! Tracing setup
//!
//! Packages the subscriber wiring for the embedding application: level from
//! config unless `RUST_LOG` overrides it, optional JSON output.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber. Call once at startup; returns an
/// error if a subscriber is already installed.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| e.to_string())
}
