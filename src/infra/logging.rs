use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "everly.log";

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Stderr,
    File { dir: &'a Path },
}

/// Keeps the non-blocking file writer flushing until dropped.
#[must_use = "dropping the guard stops log flushing"]
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

pub fn init(config: &LogConfig, sink: LogSink<'_>) -> Result<LoggingGuard, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match sink {
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(AppError::LoggingInit)?;

            Ok(LoggingGuard { _worker: None })
        }
        LogSink::File { dir } => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, worker) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(AppError::LoggingInit)?;

            Ok(LoggingGuard {
                _worker: Some(worker),
            })
        }
    }
}
