//! Remote document mirror tier.

mod data_api;
mod offline;

pub use data_api::DataApiClient;
pub use offline::OfflineMirror;

use atelier_core::config::{AppConfig, SecretConfig};
use atelier_core::persistence::RemoteMirror;
use std::sync::Arc;
use std::time::Duration;

/// Picks the mirror for a configuration.
///
/// A Data API client needs both a `[remote]` section and a `data_api` key;
/// anything less degrades to the offline mirror.
pub fn build_mirror(config: &AppConfig, secrets: &SecretConfig) -> Arc<dyn RemoteMirror> {
    match (&config.remote, &secrets.data_api) {
        (Some(remote), Some(data_api)) if !data_api.api_key.trim().is_empty() => {
            tracing::info!(
                "[RemoteMirror] Using Data API at {} (database: {})",
                remote.endpoint,
                remote.database
            );
            Arc::new(DataApiClient::new(remote, data_api.api_key.clone()))
        }
        (Some(_), _) => {
            tracing::warn!("[RemoteMirror] Remote endpoint configured without an API key; running offline");
            Arc::new(OfflineMirror::new(Duration::from_millis(
                config.storage.simulated_latency_ms,
            )))
        }
        (None, _) => {
            tracing::debug!("[RemoteMirror] No remote configured; running offline");
            Arc::new(OfflineMirror::new(Duration::from_millis(
                config.storage.simulated_latency_ms,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::config::{DataApiConfig, RemoteSettings};

    fn remote() -> RemoteSettings {
        RemoteSettings {
            endpoint: "https://example.test/data/v1".to_string(),
            data_source: "Cluster0".to_string(),
            database: "atelier".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_offline_without_credentials() {
        let config = AppConfig {
            remote: Some(remote()),
            ..AppConfig::default()
        };
        assert!(!build_mirror(&config, &SecretConfig::default()).is_configured());
    }

    #[test]
    fn test_data_api_with_endpoint_and_key() {
        let config = AppConfig {
            remote: Some(remote()),
            ..AppConfig::default()
        };
        let secrets = SecretConfig {
            data_api: Some(DataApiConfig {
                api_key: "k".to_string(),
            }),
            ..SecretConfig::default()
        };
        assert!(build_mirror(&config, &secrets).is_configured());
    }

    #[test]
    fn test_key_without_endpoint_stays_offline() {
        let secrets = SecretConfig {
            data_api: Some(DataApiConfig {
                api_key: "k".to_string(),
            }),
            ..SecretConfig::default()
        };
        assert!(!build_mirror(&AppConfig::default(), &secrets).is_configured());
    }
}
