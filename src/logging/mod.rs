//! Structured logging setup using tracing
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the host's job. This module gives embedding applications and tests a
//! one-call console bootstrap with env-filter support.
//!
//! # Example
//!
//! ```no_run
//! lethe::logging::init_logging("info").expect("Failed to initialize logging");
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::domain::{LetheError, Result};

/// Initializes a console tracing subscriber
///
/// Honors `RUST_LOG` when set; otherwise filters to `lethe=<level>`. Fails if
/// a global subscriber is already installed.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lethe={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| LetheError::Configuration(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LetheError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}
