//! Configuration service implementation.
//!
//! Loads `AppConfig` from `config.toml` (~/.config/atelier/config.toml) and
//! caches it for the lifetime of the process.

use crate::paths::AtelierPaths;
use crate::storage::AtomicFile;
use atelier_core::config::AppConfig;
use atelier_core::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first access.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service for the config file under `base_path` (or the
    /// platform config directory).
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = AtelierPaths::new(base_path).config_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading it from disk if not cached.
    ///
    /// A missing file is created with defaults; an unreadable one is logged
    /// and replaced by defaults in memory only.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "[ConfigService] Failed to load {}: {}. Using defaults",
                    self.path.display(),
                    e
                );
                AppConfig::default()
            }
        };

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig> {
        let file = AtomicFile::new(self.path.clone());

        match file.load()? {
            Some(content) => Ok(toml::from_str(&content)?),
            None => {
                let default_config = AppConfig::default();
                let content = toml::to_string_pretty(&default_config)?;
                if let Err(e) = file.save(&content) {
                    tracing::debug!(
                        "[ConfigService] Could not write default config to {}: {}",
                        self.path.display(),
                        e
                    );
                } else {
                    tracing::info!(
                        "[ConfigService] Created default config at {}",
                        self.path.display()
                    );
                }
                Ok(default_config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_creates_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let config = service.get_config();

        assert_eq!(config, AppConfig::default());
        assert!(service.path().exists());
    }

    #[test]
    fn test_reads_remote_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[remote]\nendpoint = \"https://example.test/data/v1\"\ndatabase = \"studio\"\n",
        )
        .unwrap();

        let config = ConfigService::with_path(&path).get_config();
        let remote = config.remote.unwrap();
        assert_eq!(remote.endpoint, "https://example.test/data/v1");
        assert_eq!(remote.database, "studio");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[storage\nbroken").unwrap();

        assert_eq!(ConfigService::with_path(&path).get_config(), AppConfig::default());
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[storage]\nsimulated_latency_ms = 5\n").unwrap();
        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().storage.simulated_latency_ms, 5);

        fs::write(&path, "[storage]\nsimulated_latency_ms = 9\n").unwrap();
        assert_eq!(service.get_config().storage.simulated_latency_ms, 5);

        service.invalidate_cache();
        assert_eq!(service.get_config().storage.simulated_latency_ms, 9);
    }
}
