/// Structured logging to stderr via `tracing`.
///
/// Filter priority (highest first):
/// 1. `HELPMARK_LOG` (any `EnvFilter` directive, e.g. `helpmark=trace`)
/// 2. `--debug` (debug level)
/// 3. warnings only
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::errors::CliError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HELPMARK_LOG";

/// Install the global subscriber.
///
/// # Errors
///
/// Returns `CliError::Logging` if a subscriber is already installed.
pub fn init_logging(debug: bool) -> Result<(), CliError> {
    let filter = build_env_filter(debug);
    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn build_env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(debug))
}

fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::new(if debug { "debug" } else { "warn" })
}
