use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tracing::warn;

use super::session::{ConnId, Session};
use crate::models::{PresenceEntry, ServerMessage};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("connection {0} is already registered")]
    AlreadyRegistered(ConnId),
}

/// The set of live sessions. All reads and writes go through the single
/// mutex; broadcast copies the session list under the lock and performs
/// every send after releasing it, so one stalled connection never blocks
/// registrations or removals for the rest.
pub struct ConnectionRegistry {
    sessions: Mutex<Vec<Session>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// Store a new session. A duplicate connection id is a programming
    /// error and is rejected rather than silently replacing the session.
    pub async fn register(
        &self,
        conn: ConnId,
        user: &str,
        tx: mpsc::UnboundedSender<ServerMessage>,
    ) -> Result<(), RegistryError> {
        let mut sessions = self.sessions.lock().await;
        if sessions.iter().any(|session| session.conn == conn) {
            return Err(RegistryError::AlreadyRegistered(conn));
        }
        sessions.push(Session {
            conn,
            user: user.to_string(),
            cursor: None,
            tx,
        });
        Ok(())
    }

    /// Remove a session. Removing an unknown connection is a no-op.
    pub async fn remove(&self, conn: ConnId) {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|session| session.conn != conn);
    }

    /// Update the cursor of one session. Silently ignored when the
    /// connection is gone (it may have just disconnected).
    pub async fn update_cursor(&self, conn: ConnId, position: Option<i64>) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.iter_mut().find(|session| session.conn == conn) {
            session.cursor = position;
        }
    }

    /// Point-in-time `{user, cursor}` view of all live sessions, in
    /// registration order.
    pub async fn presence_snapshot(&self) -> Vec<PresenceEntry> {
        let sessions = self.sessions.lock().await;
        sessions.iter().map(Session::presence_entry).collect()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Deliver `frame` to every session except `excluding`. Sends happen
    /// on a snapshot taken under the lock; a session whose channel is gone
    /// is swept out of the registry instead of retried.
    pub async fn broadcast(&self, frame: &ServerMessage, excluding: Option<ConnId>) {
        let targets: Vec<(ConnId, String, mpsc::UnboundedSender<ServerMessage>)> = {
            let sessions = self.sessions.lock().await;
            sessions
                .iter()
                .filter(|session| Some(session.conn) != excluding)
                .map(|session| (session.conn, session.user.clone(), session.tx.clone()))
                .collect()
        };

        let mut stale = Vec::new();
        for (conn, user, tx) in targets {
            if tx.send(frame.clone()).is_err() {
                warn!("Dropping unreachable session for user {} ({})", user, conn);
                stale.push(conn);
            }
        }
        for conn in stale {
            self.remove(conn).await;
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
