//! File-based logging for the terminal UI.
//!
//! The terminal owns stdout, so all tracing output goes to
//! `<log_dir>/plant-monitor.log`, truncated on every start.

use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::error::{DashboardError, Result};

pub const LOG_FILE_NAME: &str = "plant-monitor.log";

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `DEBUG=true` raises the default level to debug.
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("DEBUG").unwrap_or_default() == "true")
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive() -> &'static str {
    if debug_enabled() {
        "plant_monitor=debug"
    } else {
        "plant_monitor=info"
    }
}

/// Create the log directory and an empty log file.
pub fn prepare_log_file(log_dir: &Path) -> Result<(PathBuf, File)> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;
    Ok((path, file))
}

/// Install the global tracing subscriber writing to the log file.
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    let (path, file) = prepare_log_file(log_dir)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| DashboardError::LoggingError(e.to_string()))?;

    tracing::info!("Logging to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_created_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("nested").join("logs");

        let (path, _) = prepare_log_file(&logs).unwrap();
        std::fs::write(&path, "stale").unwrap();
        let (path, _) = prepare_log_file(&logs).unwrap();

        assert_eq!(path, logs.join(LOG_FILE_NAME));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_default_directive_targets_crate() {
        assert!(default_directive().starts_with("plant_monitor="));
    }
}
