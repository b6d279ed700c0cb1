//! In-memory durable store for tests and ephemeral runs.

use async_trait::async_trait;
use atelier_core::error::Result;
use atelier_core::persistence::DurableStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A `DurableStore` that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl DurableStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("atelier_user", "{}").await.unwrap();
        assert_eq!(other.get_item("atelier_user").await.unwrap().as_deref(), Some("{}"));
        other.remove_item("atelier_user").await.unwrap();
        assert!(store.is_empty().await);
    }
}
