use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use super::registry::{ConnectionRegistry, RegistryError};
use super::session::ConnId;
use crate::models::{
    now_timestamp, Document, DocumentUpdate, InitPayload, ServerMessage,
};
use crate::store::{ActivityLog, DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum CollabError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to persist document: {0}")]
    Persistence(#[from] StoreError),

    #[error("connection {0} closed before init could be delivered")]
    ConnectionClosed(ConnId),
}

/// Glue between the per-connection protocol handler and the shared
/// collaborators: the connection registry, the document store and the
/// activity log. Carries no state of its own.
pub struct CollabService {
    registry: Arc<ConnectionRegistry>,
    documents: Arc<DocumentStore>,
    activity: Arc<ActivityLog>,
}

impl CollabService {
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        documents: Arc<DocumentStore>,
        activity: Arc<ActivityLog>,
    ) -> Self {
        Self {
            registry,
            documents,
            activity,
        }
    }

    /// Bring a freshly upgraded connection into the session: register it,
    /// log the join, send the `init` frame and announce the new presence
    /// to every other session. On failure the registration is rolled back
    /// so the peer list never carries a half-joined session.
    pub async fn join(
        &self,
        conn: ConnId,
        user: &str,
        tx: &mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<(), CollabError> {
        self.registry.register(conn, user, tx.clone()).await?;

        self.record_activity(user, "joined document").await;

        let document = match self.documents.get().await {
            Ok(document) => document,
            Err(e) => {
                self.registry.remove(conn).await;
                return Err(CollabError::Persistence(e));
            }
        };

        let users = self.registry.presence_snapshot().await;
        let init = ServerMessage::Init(InitPayload { document, users });
        if tx.send(init).is_err() {
            self.registry.remove(conn).await;
            return Err(CollabError::ConnectionClosed(conn));
        }
        info!("Sent init frame to user {} ({})", user, conn);

        let presence = self.registry.presence_snapshot().await;
        self.registry
            .broadcast(&ServerMessage::Presence(presence), Some(conn))
            .await;
        Ok(())
    }

    /// Accept a document update: stamp the editor and the server time,
    /// persist the whole document (last write wins), then log and fan the
    /// new document out to every other session. On a store failure
    /// nothing is broadcast and the previous document stays in place.
    pub async fn update(
        &self,
        conn: ConnId,
        user: &str,
        update: DocumentUpdate,
    ) -> Result<Document, CollabError> {
        let document = Document {
            title: update.title,
            content: update.content,
            last_edited_by: user.to_string(),
            last_updated: now_timestamp(),
        };

        self.documents.set(document.clone()).await?;

        self.record_activity(user, "edited document").await;
        self.registry
            .broadcast(&ServerMessage::Update(document.clone()), Some(conn))
            .await;
        Ok(document)
    }

    /// Move a session's cursor and fan the fresh presence snapshot out to
    /// every other session. No persistence, no activity entry.
    pub async fn cursor(&self, conn: ConnId, position: Option<i64>) {
        self.registry.update_cursor(conn, position).await;
        let presence = self.registry.presence_snapshot().await;
        self.registry
            .broadcast(&ServerMessage::Presence(presence), Some(conn))
            .await;
    }

    /// Tear a session down: drop it from the registry, log the leave and
    /// let every remaining session observe the departure.
    pub async fn leave(&self, conn: ConnId, user: &str) {
        self.registry.remove(conn).await;
        self.record_activity(user, "left document").await;

        let presence = self.registry.presence_snapshot().await;
        self.registry
            .broadcast(&ServerMessage::Presence(presence), None)
            .await;
    }

    // A failed activity append must not take the session down with it.
    async fn record_activity(&self, user: &str, action: &str) {
        if let Err(e) = self.activity.append(user, action, None).await {
            error!("Failed to record activity '{}' for {}: {}", action, user, e);
        }
    }
}
