use std::fmt;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::{PresenceEntry, ServerMessage};

/// Identifier of one live connection, unique per upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnId(Uuid);

impl ConnId {
    pub fn new() -> Self {
        ConnId(Uuid::new_v4())
    }
}

impl Default for ConnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-side record of one live connection: identity, cursor, and the
/// outbound channel drained by the connection's writer task.
#[derive(Debug)]
pub struct Session {
    pub conn: ConnId,
    pub user: String,
    pub cursor: Option<i64>,
    pub tx: mpsc::UnboundedSender<ServerMessage>,
}

impl Session {
    pub fn presence_entry(&self) -> PresenceEntry {
        PresenceEntry {
            username: self.user.clone(),
            cursor: self.cursor,
        }
    }
}
