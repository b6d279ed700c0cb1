//! Configuration models.
//!
//! `AppConfig` lives in `config.toml`; `SecretConfig` holds credentials and
//! lives in `secret.json`. Every field has a default so a missing or partial
//! file still yields a working (offline) setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ASSISTANT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    /// Remote document API; `None` keeps the mirror offline.
    #[serde(default)]
    pub remote: Option<RemoteSettings>,
    #[serde(default)]
    pub assistant: AssistantSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StorageSettings {
    /// Overrides the platform data directory for local snapshots.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Artificial delay of the offline mirror, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RemoteSettings {
    /// Base URL of the Data API, e.g. `https://data.mongodb-api.com/app/<app>/endpoint/data/v1`.
    pub endpoint: String,
    #[serde(default = "default_data_source")]
    pub data_source: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_data_source() -> String {
    "Cluster0".to_string()
}

fn default_database() -> String {
    "atelier".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_api: Option<DataApiConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DataApiConfig {
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_offline_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.remote.is_none());
        assert_eq!(config.assistant.model, DEFAULT_ASSISTANT_MODEL);
    }

    #[test]
    fn test_remote_section_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            simulated_latency_ms = 600

            [remote]
            endpoint = "https://example.test/data/v1"
            "#,
        )
        .unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.database, "atelier");
        assert_eq!(remote.data_source, "Cluster0");
        assert_eq!(remote.timeout_secs, 10);
        assert_eq!(config.storage.simulated_latency_ms, 600);
    }
}
