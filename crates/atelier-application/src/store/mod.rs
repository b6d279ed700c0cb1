//! Application store.
//!
//! `AppStore` owns the in-memory copy of every collection plus the current
//! session. Each mutation builds a new collection, installs it under the state
//! lock and enqueues the full snapshot on the [`PersistQueue`] before the lock
//! is released. Mutations that promise durability then wait for their save.

mod persist_queue;

pub use persist_queue::{PendingSave, PersistCommand, PersistQueue, SaveAck};

use atelier_core::artist::ArtistProfile;
use atelier_core::collab::{CollabRequest, CollabRequestDraft, CollabStatus};
use atelier_core::conversation::{Conversation, Message, find_conversation_between};
use atelier_core::error::{AtelierError, Result};
use atelier_core::ids::{
    COLLAB_REQUEST_ID_PREFIX, CONVERSATION_ID_PREFIX, JOB_ID_PREFIX, MESSAGE_ID_PREFIX, new_id,
    now_timestamp,
};
use atelier_core::job::{Job, JobDraft};
use atelier_core::persistence::{AtelierDatabase, FetchStatus, Fetched, MirrorStatus};
use atelier_core::user::{UserSession, UserType, derive_user_id, display_name_from_email};
use persist_queue::wait_for;
use std::sync::Arc;
use tokio::sync::{RwLock, oneshot};

/// Everything the store holds in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub session: Option<UserSession>,
    pub artists: Vec<ArtistProfile>,
    /// Newest first
    pub jobs: Vec<Job>,
    pub conversations: Vec<Conversation>,
    /// Newest first
    pub collab_requests: Vec<CollabRequest>,
    pub is_loading: bool,
}

pub struct AppStore {
    db: Arc<dyn AtelierDatabase>,
    state: RwLock<StoreState>,
    queue: PersistQueue,
}

impl AppStore {
    /// Creates an empty store; call [`AppStore::initialize`] to load data.
    ///
    /// Spawns the persistence worker, so a Tokio runtime must be running.
    pub fn new(db: Arc<dyn AtelierDatabase>) -> Self {
        let queue = PersistQueue::spawn(db.clone());
        Self {
            db,
            state: RwLock::new(StoreState::default()),
            queue,
        }
    }

    /// Loads the four collections concurrently and restores the session.
    pub async fn initialize(&self) {
        self.state.write().await.is_loading = true;

        let (artists, jobs, conversations, collab_requests, session) = tokio::join!(
            self.db.get_artists(),
            self.db.get_jobs(),
            self.db.get_conversations(),
            self.db.get_collab_requests(),
            self.db.load_session(),
        );

        report_fallback("artists", &artists);
        report_fallback("jobs", &jobs);
        report_fallback("conversations", &conversations);
        report_fallback("collab_requests", &collab_requests);

        let mut state = self.state.write().await;
        state.artists = artists.into_items();
        state.jobs = jobs.into_items();
        state.conversations = conversations.into_items();
        state.collab_requests = collab_requests.into_items();
        state.session = session;
        state.is_loading = false;

        tracing::info!(
            "[AppStore] Loaded {} artists, {} jobs, {} conversations, {} collab requests (session: {})",
            state.artists.len(),
            state.jobs.len(),
            state.conversations.len(),
            state.collab_requests.len(),
            state.session.as_ref().map(|s| s.id.as_str()).unwrap_or("none")
        );
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    pub async fn session(&self) -> Option<UserSession> {
        self.state.read().await.session.clone()
    }

    pub async fn artists(&self) -> Vec<ArtistProfile> {
        self.state.read().await.artists.clone()
    }

    pub async fn jobs(&self) -> Vec<Job> {
        self.state.read().await.jobs.clone()
    }

    pub async fn conversations(&self) -> Vec<Conversation> {
        self.state.read().await.conversations.clone()
    }

    pub async fn collab_requests(&self) -> Vec<CollabRequest> {
        self.state.read().await.collab_requests.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// The signed-in artist's own profile, if any.
    pub async fn active_artist_profile(&self) -> Option<ArtistProfile> {
        let state = self.state.read().await;
        let profile_id = state.session.as_ref()?.profile_id.as_deref()?;
        state.artists.iter().find(|a| a.id == profile_id).cloned()
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Signs in with an email address.
    ///
    /// The user id is derived from the email, so repeated logins reuse the
    /// same id and never create a second artist profile. A new artist gets a
    /// placeholder profile whose save is enqueued but not awaited; the
    /// session itself is persisted before returning.
    pub async fn login(&self, email: &str, user_type: UserType) -> Result<UserSession> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AtelierError::invalid_input("email must not be empty"));
        }

        let id = derive_user_id(email);
        let name = display_name_from_email(email);
        let session = UserSession {
            id: id.clone(),
            name: name.clone(),
            email: email.to_string(),
            user_type,
            profile_id: (user_type == UserType::Artist).then(|| id.clone()),
        };

        {
            let mut state = self.state.write().await;
            if user_type == UserType::Artist && !state.artists.iter().any(|a| a.id == id) {
                tracing::info!("[AppStore] Creating placeholder profile for {}", id);
                state.artists.push(ArtistProfile::placeholder(&id, &name));
                self.queue
                    .enqueue(PersistCommand::SaveArtists(state.artists.clone(), None));
            }
            state.session = Some(session.clone());
        }

        self.db.save_session(&session).await?;
        tracing::info!("[AppStore] Logged in {} as {:?}", session.id, user_type);
        Ok(session)
    }

    pub async fn logout(&self) -> Result<()> {
        let previous = self.state.write().await.session.take();
        self.db.clear_session().await?;
        if let Some(session) = previous {
            tracing::info!("[AppStore] Logged out {}", session.id);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replaces the profile with the same id and waits for the save.
    ///
    /// An unknown id leaves the collection untouched and returns `NotFound`.
    pub async fn update_profile(&self, profile: ArtistProfile) -> Result<MirrorStatus> {
        let pending = {
            let mut state = self.state.write().await;
            if !state.artists.iter().any(|a| a.id == profile.id) {
                tracing::warn!("[AppStore] No artist profile with id {}, update ignored", profile.id);
                return Err(AtelierError::not_found("artist", profile.id));
            }
            state.artists = state
                .artists
                .iter()
                .map(|a| if a.id == profile.id { profile.clone() } else { a.clone() })
                .collect();
            self.save_with_ack(|ack| PersistCommand::SaveArtists(state.artists.clone(), Some(ack)))
        };

        wait_for(pending).await
    }

    /// Posts a job at the top of the list and waits for the save.
    pub async fn post_job(&self, draft: JobDraft) -> Result<Job> {
        let job = draft.into_job(new_id(JOB_ID_PREFIX), now_timestamp());

        let pending = {
            let mut state = self.state.write().await;
            state.jobs = prepend(job.clone(), &state.jobs);
            self.save_with_ack(|ack| PersistCommand::SaveJobs(state.jobs.clone(), Some(ack)))
        };

        wait_for(pending).await?;
        tracing::info!("[AppStore] Posted job {} ({})", job.id, job.title);
        Ok(job)
    }

    /// Appends a message from the signed-in user and waits for the save.
    ///
    /// Returns `Ok(None)` without writing anything when nobody is signed in
    /// or the conversation does not exist.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
        shared_portfolio_id: Option<String>,
    ) -> Result<Option<Message>> {
        let (message, pending) = {
            let mut state = self.state.write().await;
            let Some(sender_id) = state.session.as_ref().map(|s| s.id.clone()) else {
                tracing::debug!("[AppStore] send_message without a session ignored");
                return Ok(None);
            };
            if !state.conversations.iter().any(|c| c.id == conversation_id) {
                tracing::warn!("[AppStore] Conversation {} not found, message dropped", conversation_id);
                return Ok(None);
            }

            let message = Message {
                id: new_id(MESSAGE_ID_PREFIX),
                sender_id,
                text: text.to_string(),
                timestamp: now_timestamp(),
                is_read: false,
                shared_portfolio_id,
            };
            state.conversations = state
                .conversations
                .iter()
                .map(|c| {
                    if c.id == conversation_id {
                        c.with_message(message.clone())
                    } else {
                        c.clone()
                    }
                })
                .collect();
            let pending = self.save_with_ack(|ack| {
                PersistCommand::SaveConversations(state.conversations.clone(), Some(ack))
            });
            (message, pending)
        };

        wait_for(pending).await?;
        Ok(Some(message))
    }

    /// Finds the thread between the signed-in user and `other_user_id`, or
    /// starts an empty one at the top of the list.
    ///
    /// Returns `Ok(None)` without a session or when `other_user_id` is the
    /// signed-in user.
    pub async fn open_conversation(&self, other_user_id: &str) -> Result<Option<Conversation>> {
        let (conversation, pending) = {
            let mut state = self.state.write().await;
            let Some(user_id) = state.session.as_ref().map(|s| s.id.clone()) else {
                return Ok(None);
            };
            if user_id == other_user_id {
                tracing::debug!("[AppStore] open_conversation with own id {} ignored", user_id);
                return Ok(None);
            }
            if let Some(existing) =
                find_conversation_between(&state.conversations, &user_id, other_user_id)
            {
                return Ok(Some(existing.clone()));
            }

            let conversation = Conversation::new(
                new_id(CONVERSATION_ID_PREFIX),
                vec![user_id, other_user_id.to_string()],
            );
            state.conversations = prepend(conversation.clone(), &state.conversations);
            let pending = self.save_with_ack(|ack| {
                PersistCommand::SaveConversations(state.conversations.clone(), Some(ack))
            });
            (conversation, pending)
        };

        wait_for(pending).await?;
        tracing::info!("[AppStore] Opened conversation {}", conversation.id);
        Ok(Some(conversation))
    }

    /// Creates a pending request at the top of the list. The save is
    /// enqueued, not awaited.
    pub async fn send_collab_request(&self, draft: CollabRequestDraft) -> CollabRequest {
        let request = draft.into_request(new_id(COLLAB_REQUEST_ID_PREFIX), now_timestamp());

        let mut state = self.state.write().await;
        state.collab_requests = prepend(request.clone(), &state.collab_requests);
        self.queue.enqueue(PersistCommand::SaveCollabRequests(
            state.collab_requests.clone(),
            None,
        ));

        tracing::info!(
            "[AppStore] Collab request {} from {} to {}",
            request.id,
            request.from_id,
            request.to_id
        );
        request
    }

    /// Sets the status of one request. Any transition is allowed; an unknown
    /// id changes nothing. The save is enqueued, not awaited.
    pub async fn update_collab_status(&self, request_id: &str, status: CollabStatus) -> bool {
        let mut state = self.state.write().await;
        if !state.collab_requests.iter().any(|r| r.id == request_id) {
            tracing::warn!("[AppStore] Collab request {} not found", request_id);
            return false;
        }

        state.collab_requests = state
            .collab_requests
            .iter()
            .map(|r| {
                if r.id == request_id {
                    r.with_status(status)
                } else {
                    r.clone()
                }
            })
            .collect();
        self.queue.enqueue(PersistCommand::SaveCollabRequests(
            state.collab_requests.clone(),
            None,
        ));
        true
    }

    /// Waits until every save enqueued so far has completed.
    pub async fn flush(&self) -> Result<()> {
        self.queue.flush().await
    }

    fn save_with_ack(&self, build: impl FnOnce(SaveAck) -> PersistCommand) -> PendingSave {
        let (ack, pending) = oneshot::channel();
        self.queue.enqueue(build(ack));
        pending
    }
}

fn prepend<T: Clone>(item: T, rest: &[T]) -> Vec<T> {
    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(item);
    items.extend(rest.iter().cloned());
    items
}

fn report_fallback<T>(label: &str, fetched: &Fetched<T>) {
    match &fetched.status {
        FetchStatus::TransportFailure(reason) => tracing::warn!(
            "[AppStore] Loaded {} {} from {:?} after a failure: {}",
            fetched.items.len(),
            label,
            fetched.source,
            reason
        ),
        FetchStatus::NotFound => tracing::debug!(
            "[AppStore] Nothing persisted for {}, using {} seed records",
            label,
            fetched.items.len()
        ),
        FetchStatus::Success => {}
    }
}
