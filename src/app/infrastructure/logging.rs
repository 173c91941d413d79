//! Logging setup: always to a file, to stdout in debug builds or when asked.
//!
//! Filter priority is `WRITHER_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
//! The log file lives at `<data_local_dir>/writher/logs/writher.log`.

use std::env;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "warn,writher=info";

const LOG_FILE_NAME: &str = "writher.log";

/// Keeps the background file writer alive. Dropping it flushes the log.
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

pub fn init() -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (file_writer, file_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let stdout_enabled = env::var("WRITHER_LOG").is_ok()
        || env::var("RUST_LOG").is_ok()
        || cfg!(debug_assertions);
    let stdout_layer = if stdout_enabled {
        Some(fmt::layer().with_filter(env_filter()?))
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    tracing::debug!(path = %log_dir.join(LOG_FILE_NAME).display(), "logging to file");
    Ok(LogGuard { _file_guard: file_guard })
}

fn env_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directive = filter_directive(env::var("WRITHER_LOG").ok(), env::var("RUST_LOG").ok());
    EnvFilter::try_new(directive)
}

/// Pick the filter directive string by priority, skipping blank values.
pub fn filter_directive(writher_log: Option<String>, rust_log: Option<String>) -> String {
    [writher_log, rust_log]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("writher")
        .join("logs")
}
