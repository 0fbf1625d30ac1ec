//! Tracing subscriber setup
//!
//! Stdout carries command output only, so events go to a log file. Nothing is
//! installed unless a filter is configured.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Installs the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(directive) = config.filter.as_deref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter: {directive}"))?;
    let appender = file_appender(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(true)
}

fn file_appender(config: &LogConfig) -> Result<RollingFileAppender> {
    let file_name = config
        .file
        .file_name()
        .with_context(|| format!("log file has no name: {}", config.file.display()))?;
    let dir = match config.file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(&dir)
        .with_context(|| format!("failed to open log file {}", config.file.display()))
}
