//! Mirror used when no Data API credentials are configured.

use async_trait::async_trait;
use atelier_core::error::Result;
use atelier_core::persistence::{Collection, RemoteMirror};
use serde_json::Value;
use std::time::Duration;

/// A remote mirror that only simulates network latency.
///
/// `find` always returns no documents and writes are dropped.
#[derive(Debug, Clone, Default)]
pub struct OfflineMirror {
    latency: Duration,
}

impl OfflineMirror {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl RemoteMirror for OfflineMirror {
    fn is_configured(&self) -> bool {
        false
    }

    async fn find(&self, _collection: Collection) -> Result<Vec<Value>> {
        self.simulate_latency().await;
        Ok(Vec::new())
    }

    async fn insert_one(&self, _collection: Collection, _document: Value) -> Result<()> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn update_one(&self, _collection: Collection, _id: &str, _document: Value) -> Result<()> {
        self.simulate_latency().await;
        Ok(())
    }
}
