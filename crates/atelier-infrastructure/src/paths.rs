//! Unified path management for Atelier files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/atelier/           # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── logs/                    # Application logs
//!     └── atelier.log.YYYY-MM-DD
//!
//! ~/.local/share/atelier/      # Data directory
//! └── storage/                 # Durable snapshots, one <key>.json per key
//! ```
//!
//! A base path override places both trees under `<base>/config` and
//! `<base>/data`, which keeps tests and `--data-dir` runs self-contained.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "atelier";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for atelier_core::AtelierError {
    fn from(err: PathError) -> Self {
        atelier_core::AtelierError::config(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct AtelierPaths {
    base_path: Option<PathBuf>,
}

impl AtelierPaths {
    /// Creates a resolver; `None` uses the platform directories.
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base_path: base_path.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Ensure this file has restrictive permissions (600).
    pub fn secret_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    /// Directory holding one JSON snapshot per durable key.
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("storage"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dirs_end_with_app_name() {
        let paths = AtelierPaths::new(None);
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with("atelier"));
        }
        if let Ok(data_dir) = paths.data_dir() {
            assert!(data_dir.ends_with("atelier"));
        }
    }

    #[test]
    fn test_base_path_override() {
        let base = Path::new("/tmp/atelier-test");
        let paths = AtelierPaths::new(Some(base));
        assert_eq!(paths.config_file().unwrap(), base.join("config/config.toml"));
        assert_eq!(paths.secret_file().unwrap(), base.join("config/secret.json"));
        assert_eq!(paths.storage_dir().unwrap(), base.join("data/storage"));
        assert_eq!(paths.logs_dir().unwrap(), base.join("config/logs"));
    }
}
