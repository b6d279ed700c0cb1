//! Wires configuration, persistence and the assistant into one context.

use anyhow::{Result, bail};
use atelier_application::{AppStore, CreativeAssistantService};
use atelier_core::assistant::AssistantAgent;
use atelier_core::config::{AppConfig, SecretConfig};
use atelier_core::persistence::DurableStore;
use atelier_core::secret::SecretService;
use atelier_core::user::UserSession;
use atelier_infrastructure::{
    AtelierPaths, ConfigService, JsonFileStore, MemoryStore, PersistenceFacade, SecretServiceImpl,
    build_mirror,
};
use atelier_interaction::GeminiApiAgent;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct AppContext {
    pub store: AppStore,
    pub assistant: CreativeAssistantService,
}

impl AppContext {
    /// Loads config and secrets, opens the durable store and initializes the
    /// application store.
    pub async fn bootstrap(base_path: Option<&Path>, ephemeral: bool) -> Result<Self> {
        let config = ConfigService::new(base_path)?.get_config();

        let secret_service = SecretServiceImpl::new(base_path)?;
        let secrets = match secret_service.load_secrets().await {
            Ok(secrets) => secrets,
            Err(e) => {
                tracing::warn!("[Bootstrap] {}; continuing without credentials", e);
                SecretConfig::default()
            }
        };

        let local: Arc<dyn DurableStore> = if ephemeral {
            tracing::info!("[Bootstrap] Ephemeral mode: nothing is written to disk");
            Arc::new(MemoryStore::new())
        } else {
            let storage_dir = storage_dir(base_path, &config)?;
            tracing::debug!("[Bootstrap] Local storage at {}", storage_dir.display());
            Arc::new(JsonFileStore::new(storage_dir))
        };

        let facade = Arc::new(PersistenceFacade::new(local, build_mirror(&config, &secrets)));
        let store = AppStore::new(facade);
        store.initialize().await;

        let agent = GeminiApiAgent::try_from_secrets(&secrets, &config.assistant)
            .map(|agent| Arc::new(agent) as Arc<dyn AssistantAgent>);
        if agent.is_none() {
            tracing::debug!("[Bootstrap] No Gemini key configured; assistant unavailable");
        }

        Ok(Self {
            store,
            assistant: CreativeAssistantService::new(agent),
        })
    }

    pub async fn require_session(&self) -> Result<UserSession> {
        match self.store.session().await {
            Some(session) => Ok(session),
            None => bail!("Not signed in. Run `atelier login <email>` first."),
        }
    }

    /// Waits for queued saves so nothing is lost when the process exits.
    pub async fn shutdown(&self) -> Result<()> {
        self.store.flush().await?;
        Ok(())
    }
}

/// `--data-dir` wins over `storage.data_dir`, which wins over the platform
/// data directory.
fn storage_dir(base_path: Option<&Path>, config: &AppConfig) -> Result<PathBuf> {
    match (base_path, &config.storage.data_dir) {
        (None, Some(dir)) => Ok(dir.join("storage")),
        _ => Ok(AtelierPaths::new(base_path).storage_dir()?),
    }
}
