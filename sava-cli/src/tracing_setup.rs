//! Tracing setup for the sava CLI
//!
//! Usage:
//!   sava --debug ...             # Debug logging to stderr
//!   sava --quiet ...             # Warnings and errors only
//!   RUST_LOG=sava_core=debug sava  # Fine-grained log control
//!
//! Logs always go to stderr so `--json` output on stdout stays clean. The
//! live `watch` view owns the terminal, so its logs are discarded instead.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Only warnings and errors
    pub quiet: bool,
    /// Drop all log output (full-screen views)
    pub silent: bool,
}

impl TracingConfig {
    fn default_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Initialize the global subscriber
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact();

    let result = if config.silent {
        builder.with_writer(std::io::sink).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    result.map_err(|err| anyhow!(err))
}
