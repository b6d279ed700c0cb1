//! File-backed durable store: one `<key>.json` file per key.

use async_trait::async_trait;
use atelier_core::error::{AtelierError, Result};
use atelier_core::persistence::DurableStore;
use std::path::{Path, PathBuf};

use super::atomic_file::AtomicFile;

/// Durable store writing each key to `{base_dir}/{key}.json`.
///
/// Blocking file work runs on the blocking pool so async callers are never
/// stalled by fsync.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AtelierError::config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(AtomicFile::new(self.base_dir.join(format!("{key}.json"))))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AtelierError::internal(format!("Failed to join task: {}", e)))?
}

#[async_trait]
impl DurableStore for JsonFileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        run_blocking(move || file.load().map_err(AtelierError::from)).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        let value = value.to_string();
        let bytes = value.len();
        run_blocking(move || file.save(&value).map_err(AtelierError::from)).await?;
        tracing::debug!("[JsonFileStore] Wrote {} ({} bytes)", key, bytes);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        run_blocking(move || file.remove().map_err(AtelierError::from)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        assert!(store.get_item("atelier_jobs").await.unwrap().is_none());

        store.set_item("atelier_jobs", "[{\"id\":\"j1\"}]").await.unwrap();
        assert_eq!(
            store.get_item("atelier_jobs").await.unwrap().as_deref(),
            Some("[{\"id\":\"j1\"}]")
        );
        assert!(temp_dir.path().join("atelier_jobs.json").exists());

        store.remove_item("atelier_jobs").await.unwrap();
        assert!(store.get_item("atelier_jobs").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_creates_missing_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("storage"));
        store.set_item("atelier_user", "{}").await.unwrap();
        assert_eq!(store.get_item("atelier_user").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let err = store.set_item("../escape", "{}").await.unwrap_err();
        assert!(matches!(err, AtelierError::Config(_)));
    }
}
