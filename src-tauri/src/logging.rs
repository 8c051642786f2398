//! Logger Setup
//!
//! Writes `log` and `tracing` records to `<log_dir>/<app_name>.log`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Initialize the global logger. Fails if one is already installed.
pub fn init_logger(log_dir: &Path, app_name: &str, level: tracing::Level) -> Result<PathBuf, String> {
    fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;

    let log_path = log_dir.join(format!("{}.log", app_name));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| format!("Failed to open log file {}: {}", log_path.display(), e))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    Ok(log_path)
}
