//! Single-writer persistence queue.
//!
//! The store applies a mutation in memory and then enqueues a full snapshot
//! of the affected collection. One worker task drains the queue in order, so
//! the last snapshot applied in memory is always the last one written.

use atelier_core::artist::ArtistProfile;
use atelier_core::collab::CollabRequest;
use atelier_core::conversation::Conversation;
use atelier_core::error::{AtelierError, Result};
use atelier_core::job::Job;
use atelier_core::persistence::{AtelierDatabase, MirrorStatus};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Completion signal of a save command.
pub type SaveAck = oneshot::Sender<Result<MirrorStatus>>;

/// Receiving half of a [`SaveAck`].
pub type PendingSave = oneshot::Receiver<Result<MirrorStatus>>;

/// A unit of work for the persistence worker.
#[derive(Debug)]
pub enum PersistCommand {
    SaveArtists(Vec<ArtistProfile>, Option<SaveAck>),
    SaveJobs(Vec<Job>, Option<SaveAck>),
    SaveConversations(Vec<Conversation>, Option<SaveAck>),
    SaveCollabRequests(Vec<CollabRequest>, Option<SaveAck>),
    /// Answered once every earlier command has been processed.
    Flush(oneshot::Sender<()>),
}

impl PersistCommand {
    fn label(&self) -> &'static str {
        match self {
            Self::SaveArtists(..) => "artists",
            Self::SaveJobs(..) => "jobs",
            Self::SaveConversations(..) => "conversations",
            Self::SaveCollabRequests(..) => "collab_requests",
            Self::Flush(_) => "flush",
        }
    }
}

/// Handle to the persistence worker.
///
/// Must be created inside a Tokio runtime. The worker stops once every
/// handle is dropped and the queue is drained.
#[derive(Debug, Clone)]
pub struct PersistQueue {
    tx: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistQueue {
    pub fn spawn(db: Arc<dyn AtelierDatabase>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(db, rx));
        Self { tx }
    }

    /// Enqueues a command without waiting for it.
    pub fn enqueue(&self, command: PersistCommand) {
        let label = command.label();
        if self.tx.send(command).is_err() {
            tracing::error!("[PersistQueue] Worker stopped, dropping {} command", label);
        }
    }

    /// Waits until every command enqueued before this call has completed.
    pub async fn flush(&self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.enqueue(PersistCommand::Flush(done_tx));
        done_rx
            .await
            .map_err(|_| AtelierError::internal("persistence worker stopped before flush"))
    }
}

/// Awaits the outcome of an acknowledged save.
pub async fn wait_for(pending: PendingSave) -> Result<MirrorStatus> {
    pending
        .await
        .map_err(|_| AtelierError::internal("persistence worker dropped a save"))?
}

async fn run_worker(db: Arc<dyn AtelierDatabase>, mut rx: mpsc::UnboundedReceiver<PersistCommand>) {
    tracing::debug!("[PersistQueue] Worker started");

    while let Some(command) = rx.recv().await {
        match command {
            PersistCommand::SaveArtists(items, ack) => {
                complete("artists", db.save_artists(&items).await, ack);
            }
            PersistCommand::SaveJobs(items, ack) => {
                complete("jobs", db.save_jobs(&items).await, ack);
            }
            PersistCommand::SaveConversations(items, ack) => {
                complete("conversations", db.save_conversations(&items).await, ack);
            }
            PersistCommand::SaveCollabRequests(items, ack) => {
                complete("collab_requests", db.save_collab_requests(&items).await, ack);
            }
            PersistCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    tracing::debug!("[PersistQueue] Worker stopped");
}

fn complete(label: &str, result: Result<MirrorStatus>, ack: Option<SaveAck>) {
    match &result {
        Ok(MirrorStatus::Failed(reason)) => {
            tracing::warn!("[PersistQueue] Saved {} locally, mirror failed: {}", label, reason);
        }
        Ok(status) => tracing::debug!("[PersistQueue] Saved {} ({:?})", label, status),
        Err(e) => tracing::error!("[PersistQueue] Failed to save {}: {}", label, e),
    }

    if let Some(ack) = ack {
        // The caller may have stopped waiting
        let _ = ack.send(result);
    }
}
