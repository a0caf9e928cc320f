//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the default filter is invalid or a global
/// subscriber is already set.
pub fn init_tracing() -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}
