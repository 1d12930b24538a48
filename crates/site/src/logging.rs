//! Tracing subscriber setup.
//!
//! Logs always go to stderr. When a log directory is configured they are
//! also written to a daily rolling file through a non-blocking writer; the
//! returned guard must be held until exit so buffered lines are flushed.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Log file name prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "termfolio.log";

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.level.to_lowercase()
    }
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<Option<WorkerGuard>> {
    let directive = default_directive(config, verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    let Some(dir) = &config.dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging to {:?}", dir);
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let mut config = LoggingConfig::default();
        assert_eq!(default_directive(&config, false), "info");
        assert_eq!(default_directive(&config, true), "debug");

        config.level = "WARN".to_string();
        assert_eq!(default_directive(&config, false), "warn");
    }
}
