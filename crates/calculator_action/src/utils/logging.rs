use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{CalculatorError, CalculatorResult};

/// Filter used when `RUST_LOG` is unset, keeping failure diagnostics visible
const DEFAULT_FILTER: &str = "warn";

/// Initialize logging on stderr
///
/// Stdout carries the response document, so every event goes to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
pub fn init_logging() -> CalculatorResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| CalculatorError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
