//! Secret service implementation.
//!
//! Reads API keys from `secret.json` and falls back to environment variables
//! for whatever the file leaves out.

use crate::paths::AtelierPaths;
use crate::storage::AtomicFile;
use atelier_core::config::{DataApiConfig, GeminiConfig, SecretConfig};
use atelier_core::error::Result;
use atelier_core::secret::SecretService;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

const GEMINI_ENV_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
const DATA_API_ENV_KEY: &str = "ATELIER_DATA_API_KEY";

/// Service for loading secret configuration.
///
/// The result is cached after the first successful load.
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    use_env: bool,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = AtelierPaths::new(base_path).secret_file()?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_env: true,
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    /// Disables the environment fallbacks (tests).
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    fn load_secrets_internal(&self) -> std::result::Result<SecretConfig, String> {
        {
            let read_lock = self.secrets.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = match AtomicFile::new(self.path.clone()).load() {
            Ok(Some(content)) => serde_json::from_str::<SecretConfig>(&content)
                .map_err(|e| format!("Failed to parse secret file: {}", e))?,
            Ok(None) => SecretConfig::default(),
            Err(e) => return Err(format!("Failed to read secret file: {}", e)),
        };

        if self.use_env {
            apply_env_fallbacks(&mut loaded, |key| std::env::var(key).ok());
        }

        let mut write_lock = self.secrets.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }
}

/// Fills missing keys from the environment. Keys present in the file win.
fn apply_env_fallbacks(secrets: &mut SecretConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if secrets.gemini.is_none() {
        if let Some(api_key) = GEMINI_ENV_KEYS.iter().find_map(|key| non_empty(*key)) {
            tracing::debug!("[SecretService] Using Gemini API key from environment");
            secrets.gemini = Some(GeminiConfig {
                api_key,
                model_name: None,
            });
        }
    }

    if secrets.data_api.is_none() {
        if let Some(api_key) = non_empty(DATA_API_ENV_KEY) {
            tracing::debug!("[SecretService] Using Data API key from environment");
            secrets.data_api = Some(DataApiConfig { api_key });
        }
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> std::result::Result<SecretConfig, String> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
