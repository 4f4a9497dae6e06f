//! Log file setup
//!
//! The TUI owns the terminal, so tracing output goes to a file. Filtering
//! follows `RUST_LOG`, defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// File name used inside the cache directory
const LOG_FILE_NAME: &str = "hourcast.log";

#[derive(Debug, Error)]
pub enum LogError {
    /// No home directory to derive a default log path from
    #[error("Could not determine a log directory; pass --log-file")]
    NoLogDir,

    /// Creating or opening the log file failed
    #[error("Could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed
    #[error("Could not install logger: {0}")]
    Init(String),
}

/// Default log location, `~/.cache/hourcast/hourcast.log` on Linux
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "hourcast")?;
    Some(project_dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Picks the explicit path if given, otherwise the default one
pub fn resolve_log_path(explicit: Option<&Path>) -> Result<PathBuf, LogError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_log_path().ok_or(LogError::NoLogDir),
    }
}

/// Installs the global subscriber, appending to `path`
pub fn init(path: &Path) -> Result<(), LogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
