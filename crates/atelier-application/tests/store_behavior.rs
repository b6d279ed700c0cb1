use async_trait::async_trait;
use atelier_application::AppStore;
use atelier_core::artist::ArtistProfile;
use atelier_core::collab::{CollabRequest, CollabRequestDraft, CollabStatus};
use atelier_core::conversation::Conversation;
use atelier_core::error::{AtelierError, Result};
use atelier_core::job::{Job, JobCategory, JobDraft};
use atelier_core::persistence::{
    AtelierDatabase, Collection, DataSource, DurableStore, FetchStatus, Fetched, MirrorStatus,
    RemoteMirror,
};
use atelier_core::seed::SeedCatalog;
use atelier_core::user::{UserSession, UserType, derive_user_id};
use atelier_infrastructure::{MemoryStore, PersistenceFacade};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Notify;

/// A remote that refuses every call.
struct UnreachableMirror;

#[async_trait]
impl RemoteMirror for UnreachableMirror {
    fn is_configured(&self) -> bool {
        true
    }

    async fn find(&self, _: Collection) -> Result<Vec<Value>> {
        Err(AtelierError::transport("connection refused"))
    }

    async fn insert_one(&self, _: Collection, _: Value) -> Result<()> {
        Err(AtelierError::transport("connection refused"))
    }

    async fn update_one(&self, _: Collection, _: &str, _: Value) -> Result<()> {
        Err(AtelierError::transport("connection refused"))
    }
}

/// Serves empty collections; `get_artists` waits until the gate opens.
struct GatedDb {
    gate: Arc<Notify>,
}

fn nothing<T>() -> Fetched<T> {
    Fetched::new(Vec::new(), DataSource::Seed, FetchStatus::NotFound)
}

#[async_trait]
impl AtelierDatabase for GatedDb {
    async fn get_artists(&self) -> Fetched<ArtistProfile> {
        self.gate.notified().await;
        Fetched::new(SeedCatalog::builtin().artists, DataSource::Seed, FetchStatus::NotFound)
    }
    async fn save_artists(&self, _: &[ArtistProfile]) -> Result<MirrorStatus> {
        Ok(MirrorStatus::Skipped)
    }
    async fn get_jobs(&self) -> Fetched<Job> {
        nothing()
    }
    async fn save_jobs(&self, _: &[Job]) -> Result<MirrorStatus> {
        Ok(MirrorStatus::Skipped)
    }
    async fn get_conversations(&self) -> Fetched<Conversation> {
        nothing()
    }
    async fn save_conversations(&self, _: &[Conversation]) -> Result<MirrorStatus> {
        Ok(MirrorStatus::Skipped)
    }
    async fn get_collab_requests(&self) -> Fetched<CollabRequest> {
        nothing()
    }
    async fn save_collab_requests(&self, _: &[CollabRequest]) -> Result<MirrorStatus> {
        Ok(MirrorStatus::Skipped)
    }
    async fn load_session(&self) -> Option<UserSession> {
        None
    }
    async fn save_session(&self, _: &UserSession) -> Result<()> {
        Ok(())
    }
    async fn clear_session(&self) -> Result<()> {
        Ok(())
    }
}

fn facade(store: &Arc<MemoryStore>) -> Arc<PersistenceFacade> {
    Arc::new(PersistenceFacade::offline(store.clone()))
}

async fn open_store(store: &Arc<MemoryStore>) -> AppStore {
    let app = AppStore::new(facade(store));
    app.initialize().await;
    app
}

fn job_draft(title: &str) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        company: "Northlight Studio".to_string(),
        category: JobCategory::Freelance,
        description: "Storyboards for a short film.".to_string(),
        budget: "$1,200".to_string(),
        skills: JobDraft::parse_skills("Storyboarding, Ink ,"),
        deadline: "2024-11-30".to_string(),
        posted_by: "u_client".to_string(),
    }
}

#[tokio::test]
async fn initialize_uses_seed_for_empty_collections() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;

    let state = app.snapshot().await;
    assert!(!state.is_loading);
    assert!(state.session.is_none());
    assert_eq!(state.artists, SeedCatalog::builtin().artists);
    assert_eq!(state.jobs, SeedCatalog::builtin().jobs);
    assert!(state.conversations.is_empty());
}

#[tokio::test]
async fn login_creates_exactly_one_profile_per_email() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let seeded = app.artists().await.len();

    let first = app.login("alice@x.com", UserType::Artist).await.unwrap();
    let second = app.login("  Alice@X.com ", UserType::Artist).await.unwrap();

    assert_eq!(first.id, derive_user_id("alice@x.com"));
    assert_eq!(first.id, second.id);
    assert_eq!(first.profile_id.as_deref(), Some(first.id.as_str()));
    assert_eq!(first.name, "alice");

    let artists = app.artists().await;
    assert_eq!(artists.len(), seeded + 1);
    let created = artists.iter().find(|a| a.id == first.id).unwrap();
    assert_eq!(created.headline, "Emerging Artist");
    assert!(created.skills.is_empty() && created.mediums.is_empty());
    assert!(created.portfolio.is_empty() && created.experience.is_empty());
    assert!(created.collab_preferences.is_open);
}

#[tokio::test]
async fn client_login_has_no_profile() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let seeded = app.artists().await;

    let session = app.login("buyer@gallery.com", UserType::Client).await.unwrap();

    assert!(session.profile_id.is_none());
    assert_eq!(app.artists().await, seeded);
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let app = open_store(&Arc::new(MemoryStore::new())).await;
    let err = app.login("   ", UserType::Client).await.unwrap_err();
    assert!(matches!(err, AtelierError::InvalidInput(_)));
    assert!(app.session().await.is_none());
}

#[tokio::test]
async fn session_and_profile_survive_restart() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let session = app.login("maya@studio.io", UserType::Artist).await.unwrap();
    app.flush().await.unwrap();

    let reopened = open_store(&store).await;
    assert_eq!(reopened.session().await, Some(session.clone()));
    assert_eq!(
        reopened.active_artist_profile().await.map(|p| p.id),
        Some(session.id)
    );

    reopened.logout().await.unwrap();
    assert!(reopened.session().await.is_none());
    assert!(open_store(&store).await.session().await.is_none());
}

#[tokio::test]
async fn post_job_prepends_and_preserves_order() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let before = app.jobs().await;

    let job = app.post_job(job_draft("Storyboard Artist")).await.unwrap();

    let after = app.jobs().await;
    assert_eq!(after[0], job);
    assert_eq!(&after[1..], before.as_slice());
    assert!(job.id.starts_with("j_"));
    assert_eq!(job.skills, vec!["Storyboarding", "Ink"]);

    // Awaited: already durable without a flush
    let persisted = facade(&store).get_jobs().await;
    assert_eq!(persisted.source, DataSource::Local);
    assert_eq!(persisted.items, after);
}

#[tokio::test]
async fn send_message_appends_without_touching_history() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let me = app.login("kai@x.com", UserType::Client).await.unwrap();

    let conversation = app.open_conversation("a1").await.unwrap().unwrap();
    let first = app
        .send_message(&conversation.id, "Hi Elena!", None)
        .await
        .unwrap()
        .unwrap();
    let before = app
        .conversations()
        .await
        .into_iter()
        .find(|c| c.id == conversation.id)
        .unwrap();

    let second = app
        .send_message(&conversation.id, "See my piece", Some("p1".to_string()))
        .await
        .unwrap()
        .unwrap();

    let after = app
        .conversations()
        .await
        .into_iter()
        .find(|c| c.id == conversation.id)
        .unwrap();
    assert_eq!(after.messages.len(), before.messages.len() + 1);
    assert_eq!(&after.messages[..before.messages.len()], before.messages.as_slice());
    assert_eq!(after.messages.last(), Some(&second));
    assert_eq!(first.sender_id, me.id);
    assert!(!second.is_read);
    assert_eq!(second.shared_portfolio_id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn send_message_without_session_is_a_no_op() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;

    let sent = app.send_message("c1", "hello", None).await.unwrap();

    assert!(sent.is_none());
    assert!(app.conversations().await.is_empty());
    assert!(store.get_item("atelier_conversations").await.unwrap().is_none());
}

#[tokio::test]
async fn send_message_to_unknown_conversation_is_a_no_op() {
    let app = open_store(&Arc::new(MemoryStore::new())).await;
    app.login("kai@x.com", UserType::Client).await.unwrap();
    assert!(app.send_message("c_missing", "hello", None).await.unwrap().is_none());
}

#[tokio::test]
async fn open_conversation_reuses_existing_thread() {
    let app = open_store(&Arc::new(MemoryStore::new())).await;
    assert!(app.open_conversation("a2").await.unwrap().is_none());

    let me = app.login("kai@x.com", UserType::Client).await.unwrap();
    let first = app.open_conversation("a2").await.unwrap().unwrap();
    let again = app.open_conversation("a2").await.unwrap().unwrap();

    assert_eq!(first.id, again.id);
    assert_eq!(first.participants, vec![me.id, "a2".to_string()]);
    assert_eq!(app.conversations().await.len(), 1);
}

#[tokio::test]
async fn update_collab_status_changes_only_status() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;

    let target = app
        .send_collab_request(CollabRequestDraft {
            from_id: "u_1".to_string(),
            to_id: "a1".to_string(),
            message: "Album art?".to_string(),
        })
        .await;
    let other = app
        .send_collab_request(CollabRequestDraft {
            from_id: "u_2".to_string(),
            to_id: "a3".to_string(),
            message: "Zine?".to_string(),
        })
        .await;
    assert_eq!(target.status, CollabStatus::Pending);
    let before = app.collab_requests().await;
    assert_eq!(before[0], other);

    assert!(app.update_collab_status(&target.id, CollabStatus::Accepted).await);

    let after = app.collab_requests().await;
    let updated = after.iter().find(|r| r.id == target.id).unwrap();
    assert_eq!(updated, &target.with_status(CollabStatus::Accepted));
    assert_eq!(after.iter().find(|r| r.id == other.id), Some(&other));

    // No transition guard
    assert!(app.update_collab_status(&target.id, CollabStatus::Declined).await);
    assert!(!app.update_collab_status("cr_missing", CollabStatus::Accepted).await);
}

#[tokio::test]
async fn last_applied_state_is_last_persisted() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;

    let mut ids = Vec::new();
    for i in 0..10 {
        let request = app
            .send_collab_request(CollabRequestDraft {
                from_id: format!("u_{i}"),
                to_id: "a1".to_string(),
                message: format!("request {i}"),
            })
            .await;
        ids.push(request.id);
    }
    app.update_collab_status(&ids[3], CollabStatus::Declined).await;
    app.flush().await.unwrap();

    let persisted = facade(&store).get_collab_requests().await.items;
    assert_eq!(persisted, app.collab_requests().await);
    assert_eq!(persisted.len(), 10);
}

#[tokio::test]
async fn update_profile_replaces_by_id() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    let session = app.login("ren@x.com", UserType::Artist).await.unwrap();
    app.flush().await.unwrap();

    let mut profile = app.active_artist_profile().await.unwrap();
    profile.headline = "Ceramicist".to_string();
    profile.mediums = vec!["Clay".to_string()];
    app.update_profile(profile.clone()).await.unwrap();

    let persisted = facade(&store).get_artists().await.items;
    assert_eq!(persisted.iter().find(|a| a.id == session.id), Some(&profile));
    assert_eq!(persisted, app.artists().await);
}

#[tokio::test]
async fn update_profile_for_unknown_id_changes_nothing() {
    let app = open_store(&Arc::new(MemoryStore::new())).await;
    let before = app.artists().await;

    let stranger = atelier_core::artist::ArtistProfile::placeholder("u_ghost", "ghost");
    let err = app.update_profile(stranger).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(app.artists().await, before);
}

#[tokio::test]
async fn unreachable_remote_still_serves_local_or_seed() {
    let store = Arc::new(MemoryStore::new());
    let db: Arc<dyn AtelierDatabase> =
        Arc::new(PersistenceFacade::new(store.clone(), Arc::new(UnreachableMirror)));

    let seeded = db.get_artists().await;
    assert_eq!(seeded.items, SeedCatalog::builtin().artists);

    let app = AppStore::new(db.clone());
    app.initialize().await;
    app.login("ola@x.com", UserType::Artist).await.unwrap();
    app.flush().await.unwrap();

    let fetched = db.get_artists().await;
    assert_eq!(fetched.source, DataSource::Local);
    assert_eq!(fetched.items, app.artists().await);
}

#[tokio::test]
async fn persisted_conversations_round_trip_through_store() {
    let store = Arc::new(MemoryStore::new());
    let app = open_store(&store).await;
    app.login("kai@x.com", UserType::Client).await.unwrap();
    let conversation: Conversation = app.open_conversation("a3").await.unwrap().unwrap();
    app.send_message(&conversation.id, "Hello Sofia", None)
        .await
        .unwrap();

    let reopened = open_store(&store).await;
    assert_eq!(reopened.conversations().await, app.conversations().await);
}

#[tokio::test]
async fn is_loading_until_every_collection_resolves() {
    let gate = Arc::new(Notify::new());
    let app = AppStore::new(Arc::new(GatedDb { gate: gate.clone() }));
    assert!(!app.is_loading().await);

    let watcher = async {
        while !app.is_loading().await {
            tokio::task::yield_now().await;
        }
        // Artists are still blocked on the gate
        for _ in 0..10 {
            tokio::task::yield_now().await;
            assert!(app.is_loading().await);
        }
        assert!(app.artists().await.is_empty());
        gate.notify_one();
    };
    tokio::join!(app.initialize(), watcher);

    assert!(!app.is_loading().await);
    assert_eq!(app.artists().await, SeedCatalog::builtin().artists);
}

#[tokio::test]
async fn fractional_prices_survive_a_new_artist_login() {
    let store = Arc::new(MemoryStore::new());
    let mut mine = serde_json::to_value(ArtistProfile::placeholder("u_mine", "mine")).unwrap();
    mine["pricing"] = json!({"min": 12.5, "max": 40, "unit": "hour"});
    store
        .set_item("atelier_artists", &serde_json::to_string(&vec![mine]).unwrap())
        .await
        .unwrap();

    let app = open_store(&store).await;
    let loaded: Vec<String> = app.artists().await.into_iter().map(|a| a.id).collect();
    assert_eq!(loaded, vec!["u_mine".to_string()]);

    app.login("new@x.com", UserType::Artist).await.unwrap();
    app.flush().await.unwrap();

    let persisted = facade(&store).get_artists().await.items;
    assert_eq!(persisted.len(), 2);
    let kept = persisted.iter().find(|a| a.id == "u_mine").unwrap();
    assert_eq!(kept.pricing.min, 12.5);
    assert_eq!(kept.pricing.max, 40.0);
}

#[tokio::test]
async fn open_conversation_with_self_is_rejected() {
    let app = open_store(&Arc::new(MemoryStore::new())).await;
    let me = app.login("kai@x.com", UserType::Client).await.unwrap();
    let with_elena = app.open_conversation("a1").await.unwrap().unwrap();

    assert!(app.open_conversation(&me.id).await.unwrap().is_none());

    let conversations = app.conversations().await;
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].id, with_elena.id);
}
