//! Process-wide logger
//!
//! [`init`] is called once from `main`. Console output goes to stderr,
//! errors are also appended to a persistent log file.

use crate::app::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Install the global subscriber
///
/// The returned guard flushes the log file when dropped, so keep it alive
/// until the process exits.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<WorkerGuard> {
    let console_level = if verbose {
        LevelFilter::TRACE
    } else {
        parse_level(&config.console_level)?
    };
    let file_level = parse_level(&config.file_level)?;

    let file_appender = open_log_file(config)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level);

    let (json_layer, text_layer) = if config.json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_level);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_level);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .context("Failed to install global logger")?;

    Ok(guard)
}

/// Open `<directory>/<file_name>` for appending, creating both if needed
pub fn open_log_file(config: &LoggingConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.directory)
        .with_context(|| format!("Failed to create log directory {:?}", config.directory))?;

    // Never rotates, so the file name is used as is
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&config.file_name)
        .build(&config.directory)
        .with_context(|| format!("Failed to open log file {:?}", config.file_name))
}

/// Parse a level name such as `info` or `error`
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level: {:?}", level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("ERROR").unwrap(), LevelFilter::ERROR);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_level("loud").is_err());
    }
}
