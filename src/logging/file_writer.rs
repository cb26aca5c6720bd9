//! File-based logging with tracing integration
//!
//! Sets up file logging with timestamped filenames.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Information about the current log file
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    /// Full path to the log file
    pub path: PathBuf,
}

/// Generate a timestamped log file path
pub fn create_log_file_path(logs_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!("tty-clock-{}.log", timestamp))
}

/// Guard that keeps the log file open
pub struct LoggingGuard {
    _file: Arc<File>,
}

/// Open a fresh log file in `logs_dir`
fn open_log_file(logs_dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(logs_dir).context("Failed to create logs directory")?;

    let log_path = create_log_file_path(logs_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    Ok((log_path, file))
}

/// Initialize file logging
///
/// Returns the log file info and a guard that must be kept alive for the duration of logging.
pub fn init_file_logging(logs_dir: &Path) -> Result<(LogFileInfo, LoggingGuard)> {
    let (log_path, file) = open_log_file(logs_dir)?;
    // `&File` is a writer, so a shared handle serves as the writer factory
    let file = Arc::new(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::clone(&file))
        .with_ansi(false)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tty_clock=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let info = LogFileInfo { path: log_path };
    let guard = LoggingGuard { _file: file };

    Ok((info, guard))
}
