//! Persistence facade: local durable snapshots plus a best-effort remote mirror.
//!
//! Reads resolve in three tiers and stop at the first non-empty one:
//! the local snapshot, the remote `find`, then the seed catalog. Writes store
//! the whole collection locally first and only then push to the mirror; a
//! mirror failure is reported, never raised.

use async_trait::async_trait;
use atelier_core::artist::ArtistProfile;
use atelier_core::collab::CollabRequest;
use atelier_core::conversation::{Conversation, most_recently_active};
use atelier_core::error::Result;
use atelier_core::job::Job;
use atelier_core::persistence::{
    AtelierDatabase, Collection, DataSource, DurableStore, FetchStatus, Fetched, MirrorStatus,
    RemoteMirror, SESSION_KEY,
};
use atelier_core::seed::SeedCatalog;
use atelier_core::user::UserSession;
use futures::future::join_all;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::remote::OfflineMirror;

/// One pending write against the remote mirror.
#[derive(Debug, Clone)]
enum MirrorWrite {
    Insert(Value),
    Upsert { id: String, document: Value },
}

pub struct PersistenceFacade {
    local: Arc<dyn DurableStore>,
    remote: Arc<dyn RemoteMirror>,
    seeds: SeedCatalog,
}

impl PersistenceFacade {
    /// Creates a facade with the builtin seed catalog.
    pub fn new(local: Arc<dyn DurableStore>, remote: Arc<dyn RemoteMirror>) -> Self {
        Self {
            local,
            remote,
            seeds: SeedCatalog::builtin(),
        }
    }

    /// Creates a facade without a remote tier (zero-latency offline mirror).
    pub fn offline(local: Arc<dyn DurableStore>) -> Self {
        Self::new(local, Arc::new(OfflineMirror::default()))
    }

    pub fn with_seeds(mut self, seeds: SeedCatalog) -> Self {
        self.seeds = seeds;
        self
    }

    async fn read_local<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.local.get_item(collection.storage_key()).await? else {
            return Ok(None);
        };
        // A cleared key may hold the literal `null`
        let items: Option<Vec<T>> = serde_json::from_str(&raw)?;
        Ok(items)
    }

    async fn read_remote<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let documents = self.remote.find(collection).await?;
        documents
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(Into::into))
            .collect()
    }

    async fn fetch<T>(&self, collection: Collection, seed: &[T]) -> Fetched<T>
    where
        T: DeserializeOwned + Clone,
    {
        let mut failures: Vec<String> = Vec::new();

        match self.read_local::<T>(collection).await {
            Ok(Some(items)) if !items.is_empty() => {
                return Fetched::new(items, DataSource::Local, FetchStatus::Success);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Facade] Local snapshot of {} unreadable: {}", collection, e);
                failures.push(format!("local: {}", e));
            }
        }

        match self.read_remote::<T>(collection).await {
            Ok(items) if !items.is_empty() => {
                let status = failure_status(&failures).unwrap_or(FetchStatus::Success);
                return Fetched::new(items, DataSource::Remote, status);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Facade] Remote read of {} failed, using fallback: {}", collection, e);
                failures.push(format!("remote: {}", e));
            }
        }

        let status = failure_status(&failures).unwrap_or(FetchStatus::NotFound);
        tracing::debug!(
            "[Facade] {} resolved to {} seed records ({:?})",
            collection,
            seed.len(),
            status
        );
        Fetched::new(seed.to_vec(), DataSource::Seed, status)
    }

    async fn persist<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.local.set_item(collection.storage_key(), &json).await?;
        tracing::debug!("[Facade] Saved {} {} locally", items.len(), collection);
        Ok(())
    }

    async fn mirror(&self, collection: Collection, writes: Vec<MirrorWrite>) -> MirrorStatus {
        if writes.is_empty() {
            return MirrorStatus::Skipped;
        }

        let remote = &self.remote;
        let results = join_all(writes.into_iter().map(|write| async move {
            match write {
                MirrorWrite::Insert(document) => remote.insert_one(collection, document).await,
                MirrorWrite::Upsert { id, document } => {
                    remote.update_one(collection, &id, document).await
                }
            }
        }))
        .await;

        if !remote.is_configured() {
            return MirrorStatus::Skipped;
        }

        let failures: Vec<String> = results
            .into_iter()
            .filter_map(|r| r.err().map(|e| e.to_string()))
            .collect();

        if failures.is_empty() {
            MirrorStatus::Mirrored
        } else {
            tracing::warn!(
                "[Facade] Mirroring {} failed for {} write(s): {}",
                collection,
                failures.len(),
                failures[0]
            );
            MirrorStatus::Failed(failures.join("; "))
        }
    }

    async fn save_collection<T: Serialize>(
        &self,
        collection: Collection,
        items: &[T],
        writes: Vec<MirrorWrite>,
    ) -> Result<MirrorStatus> {
        self.persist(collection, items).await?;
        Ok(self.mirror(collection, writes).await)
    }
}

fn failure_status(failures: &[String]) -> Option<FetchStatus> {
    if failures.is_empty() {
        None
    } else {
        Some(FetchStatus::TransportFailure(failures.join("; ")))
    }
}

fn upsert<T: Serialize>(id: &str, item: &T) -> Result<MirrorWrite> {
    Ok(MirrorWrite::Upsert {
        id: id.to_string(),
        document: serde_json::to_value(item)?,
    })
}

#[async_trait]
impl AtelierDatabase for PersistenceFacade {
    async fn get_artists(&self) -> Fetched<ArtistProfile> {
        self.fetch(Collection::Artists, &self.seeds.artists).await
    }

    async fn save_artists(&self, artists: &[ArtistProfile]) -> Result<MirrorStatus> {
        let writes = artists
            .iter()
            .map(|a| upsert(&a.id, a))
            .collect::<Result<Vec<_>>>()?;
        self.save_collection(Collection::Artists, artists, writes).await
    }

    async fn get_jobs(&self) -> Fetched<Job> {
        self.fetch(Collection::Jobs, &self.seeds.jobs).await
    }

    async fn save_jobs(&self, jobs: &[Job]) -> Result<MirrorStatus> {
        // Only the newest posting is pushed; older ones are assumed mirrored already
        let writes = match jobs.first() {
            Some(newest) => vec![MirrorWrite::Insert(serde_json::to_value(newest)?)],
            None => Vec::new(),
        };
        self.save_collection(Collection::Jobs, jobs, writes).await
    }

    async fn get_conversations(&self) -> Fetched<Conversation> {
        self.fetch(Collection::Conversations, &self.seeds.conversations)
            .await
    }

    async fn save_conversations(&self, conversations: &[Conversation]) -> Result<MirrorStatus> {
        // A fresh thread is prepended empty; push it before any older active one
        let newly_opened = conversations.first().filter(|c| c.messages.is_empty());
        let target = newly_opened
            .or_else(|| most_recently_active(conversations))
            .or(conversations.first());
        let writes = match target {
            Some(latest) => vec![upsert(&latest.id, latest)?],
            None => Vec::new(),
        };
        self.save_collection(Collection::Conversations, conversations, writes)
            .await
    }

    async fn get_collab_requests(&self) -> Fetched<CollabRequest> {
        self.fetch(Collection::CollabRequests, &self.seeds.collab_requests)
            .await
    }

    async fn save_collab_requests(&self, requests: &[CollabRequest]) -> Result<MirrorStatus> {
        let writes = requests
            .iter()
            .map(|r| upsert(&r.id, r))
            .collect::<Result<Vec<_>>>()?;
        self.save_collection(Collection::CollabRequests, requests, writes)
            .await
    }

    async fn load_session(&self) -> Option<UserSession> {
        let raw = match self.local.get_item(SESSION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("[Facade] Failed to read stored session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Option<UserSession>>(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("[Facade] Stored session is corrupt, ignoring it: {}", e);
                None
            }
        }
    }

    async fn save_session(&self, session: &UserSession) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.local.set_item(SESSION_KEY, &json).await
    }

    async fn clear_session(&self) -> Result<()> {
        self.local.remove_item(SESSION_KEY).await
    }
}
