//! Logging setup
//!
//! Events go to stderr in line mode and to a file (or nowhere) while the
//! terminal UI owns the screen. `RUST_LOG` overrides the configured level.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("log path {} has no file name", .0.display())]
    NoFileName(PathBuf),
    #[error("cannot open log file: {0}")]
    File(#[from] InitError),
    #[error("failed to install logger: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber
///
/// # Errors
/// Returns `LoggingError` if `level` is not a valid filter, the log path has no
/// file name, or a subscriber is already installed.
pub fn init_logging(level: &str, target: &LogTarget) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(level)?,
    };
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_writer(std::io::stderr))
            .try_init()?,
        LogTarget::File(path) => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_ansi(false).with_writer(file_appender(path)?))
            .try_init()?,
    }
    Ok(())
}

fn parse_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Appender writing to exactly `path`, never rotated
fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::NoFileName(path.to_path_buf()))?;
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)?)
}
