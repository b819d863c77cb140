//! Path utilities for Sample Tracker data directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.sample-tracker location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.sample-tracker)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".sample-tracker"))
        .unwrap_or_else(|| PathBuf::from(".sample-tracker"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.sample-tracker
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the logs directory (~/.sample-tracker/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.sample-tracker/logs/sample-tracker.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("sample-tracker.log")
}

/// Get the config file path (~/.sample-tracker/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest_under_data_dir() {
        let base = data_dir();
        assert!(logs_dir().starts_with(&base));
        assert!(log_file_path().starts_with(logs_dir()));
        assert_eq!(config_path(), base.join("config.toml"));
    }
}
