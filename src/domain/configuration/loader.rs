//! Configuration file discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppConfig, AppError};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "outreach.toml";

/// Load configuration.
///
/// An explicit path, relative to `cwd`, must exist. Without one, `outreach.toml` in `cwd` is used
/// when present, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = resolve_path(cwd, path);
            if !path.exists() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            path
        }
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content)?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve a configured path against the working directory.
pub fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) }
}
