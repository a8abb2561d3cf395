//! Log subscriber setup
//!
//! Logging is off unless a log file is configured. Writing to stdout or
//! stderr would tear the alternate screen.

use crate::config::Settings;
use crate::error::ConfigError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `settings`.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init(settings: &Settings) -> Result<bool, ConfigError> {
    let Some(path) = settings.log_file.as_ref() else {
        return Ok(false);
    };

    let filter =
        EnvFilter::try_new(&settings.log_level).map_err(|e| ConfigError::LogFilter {
            filter: settings.log_level.clone(),
            message: e.to_string(),
        })?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| ConfigError::SubscriberInstalled)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
