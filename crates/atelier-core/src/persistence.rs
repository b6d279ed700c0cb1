//! Persistence boundary traits.
//!
//! The facade ([`AtelierDatabase`]) is the only component that performs I/O
//! against the durable local store and the remote document mirror. Reads never
//! fail: they report what happened through [`FetchStatus`] and always hand back
//! the best data available. Writes fail only when the local durable copy could
//! not be written; the remote mirror is best-effort and reported separately.

use async_trait::async_trait;
use serde_json::Value;

use crate::artist::ArtistProfile;
use crate::collab::CollabRequest;
use crate::conversation::Conversation;
use crate::error::Result;
use crate::job::Job;
use crate::user::UserSession;

/// Durable storage key of the signed-in user.
pub const SESSION_KEY: &str = "atelier_user";

/// One of the four entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Artists,
    Jobs,
    Conversations,
    CollabRequests,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Artists,
        Collection::Jobs,
        Collection::Conversations,
        Collection::CollabRequests,
    ];

    /// Key of the local durable snapshot.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Artists => "atelier_artists",
            Self::Jobs => "atelier_jobs",
            Self::Conversations => "atelier_conversations",
            Self::CollabRequests => "atelier_collab_reqs",
        }
    }

    /// Name of the collection in the remote document store.
    pub fn remote_name(&self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Jobs => "jobs",
            Self::Conversations => "conversations",
            Self::CollabRequests => "collab_requests",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.remote_name())
    }
}

/// Where the items of a [`Fetched`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Previously persisted local snapshot
    Local,
    /// Remote document mirror
    Remote,
    /// Seed catalog (possibly empty)
    Seed,
}

/// Typed outcome of a facade read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Real data was found locally or remotely.
    Success,
    /// Nothing was persisted anywhere; the seed catalog was used.
    NotFound,
    /// A tier failed (unreadable snapshot, unreachable remote) and resolution
    /// fell through to the next one.
    TransportFailure(String),
}

/// Result of a facade read. Always carries usable items.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub source: DataSource,
    pub status: FetchStatus,
}

impl<T> Fetched<T> {
    pub fn new(items: Vec<T>, source: DataSource, status: FetchStatus) -> Self {
        Self {
            items,
            source,
            status,
        }
    }

    /// True when the items are not real persisted data.
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Seed || matches!(self.status, FetchStatus::TransportFailure(_))
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Outcome of the best-effort remote mirror step of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorStatus {
    /// The remote accepted every write.
    Mirrored,
    /// No remote is configured, or there was nothing to push.
    Skipped,
    /// The remote could not be reached or rejected a write. The local save
    /// still succeeded.
    Failed(String),
}

/// The persistence facade: get/save per collection plus the durable session.
#[async_trait]
pub trait AtelierDatabase: Send + Sync {
    async fn get_artists(&self) -> Fetched<ArtistProfile>;
    async fn save_artists(&self, artists: &[ArtistProfile]) -> Result<MirrorStatus>;

    async fn get_jobs(&self) -> Fetched<Job>;
    async fn save_jobs(&self, jobs: &[Job]) -> Result<MirrorStatus>;

    async fn get_conversations(&self) -> Fetched<Conversation>;
    async fn save_conversations(&self, conversations: &[Conversation]) -> Result<MirrorStatus>;

    async fn get_collab_requests(&self) -> Fetched<CollabRequest>;
    async fn save_collab_requests(&self, requests: &[CollabRequest]) -> Result<MirrorStatus>;

    /// Restores the persisted session. Unreadable data counts as no session.
    async fn load_session(&self) -> Option<UserSession>;
    async fn save_session(&self, session: &UserSession) -> Result<()>;
    async fn clear_session(&self) -> Result<()>;
}

/// Durable string key/value storage, the local tier of the facade.
#[async_trait]
pub trait DurableStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// Remote document store used as a best-effort mirror.
///
/// Documents are addressed by their `id` field.
#[async_trait]
pub trait RemoteMirror: Send + Sync {
    /// False when no credentials are configured; calls then only simulate latency.
    fn is_configured(&self) -> bool;

    async fn find(&self, collection: Collection) -> Result<Vec<Value>>;

    async fn insert_one(&self, collection: Collection, document: Value) -> Result<()>;

    /// Replaces (or creates) the document whose `id` equals `id`.
    async fn update_one(&self, collection: Collection, id: &str, document: Value) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_match_browser_keys() {
        let keys: Vec<_> = Collection::ALL.iter().map(|c| c.storage_key()).collect();
        assert_eq!(
            keys,
            vec![
                "atelier_artists",
                "atelier_jobs",
                "atelier_conversations",
                "atelier_collab_reqs"
            ]
        );
        assert_eq!(Collection::CollabRequests.remote_name(), "collab_requests");
    }

    #[test]
    fn test_fallback_detection() {
        let local: Fetched<u8> = Fetched::new(vec![1], DataSource::Local, FetchStatus::Success);
        assert!(!local.is_fallback());

        let seeded: Fetched<u8> = Fetched::new(vec![], DataSource::Seed, FetchStatus::NotFound);
        assert!(seeded.is_fallback());

        let degraded: Fetched<u8> = Fetched::new(
            vec![1],
            DataSource::Remote,
            FetchStatus::TransportFailure("corrupt snapshot".into()),
        );
        assert!(degraded.is_fallback());
    }
}
