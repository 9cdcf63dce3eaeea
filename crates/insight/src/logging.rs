#![forbid(unsafe_code)]

//! Structured logging to a file.
//!
//! The terminal belongs to the UI, so log output never goes to stdout or
//! stderr. Without a configured file no subscriber is installed and every
//! `tracing` call is a no-op.
//!
//! The filter comes from `INSIGHT_LOG` when set, otherwise from
//! `[logging].filter`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{InsightError, Result};

pub const FILTER_ENV: &str = "INSIGHT_LOG";

/// Build the filter directive set.
///
/// # Errors
///
/// Returns [`InsightError::Logging`] when the directives do not parse.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = std::env::var(FILTER_ENV).unwrap_or_else(|_| config.filter.clone());
    EnvFilter::try_new(&directives)
        .map_err(|e| InsightError::Logging(format!("invalid filter {directives:?}: {e}")))
}

/// Install the global subscriber. Returns `false` when logging is disabled.
///
/// # Errors
///
/// Fails if the log file cannot be opened, the filter is invalid, or a
/// global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| InsightError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), json = config.json, "logging initialized");
    Ok(true)
}
