mod config;

pub use config::{CatalogConfig, Config, LocationConfig, LoggingConfig, RecommendationsConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `ALFRED_HOME` wins when set. Otherwise `~/.config/alfred`, or
/// `~/.config/alfred-dev` when `ALFRED_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ALFRED_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("ALFRED_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("alfred-dev")
            } else {
                base_dir.join("alfred")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
