use std::path::{Path, PathBuf};

use super::{JsonFile, StoreError};
use crate::models::{now_timestamp, ActivityEntry, ActivityPayload};

/// Append-only activity log persisted as `{"logs": [...]}`.
pub struct ActivityLog {
    file: JsonFile<ActivityPayload>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Create the backing file with an empty log if it does not exist yet.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path().exists() {
            return Ok(());
        }
        self.file.save(&ActivityPayload::default()).await
    }

    /// Append one entry, stamped with the current server time.
    pub async fn append(
        &self,
        user: &str,
        action: &str,
        details: Option<&str>,
    ) -> Result<(), StoreError> {
        let entry = ActivityEntry {
            timestamp: now_timestamp(),
            user: user.to_string(),
            action: action.to_string(),
            details: details.map(str::to_string),
        };
        self.file
            .update(move |payload| payload.logs.push(entry))
            .await
    }

    pub async fn list(&self) -> Result<ActivityPayload, StoreError> {
        self.file.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_keeps_arrival_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("activity.json"));

        log.append("alice", "joined document", None).await.unwrap();
        log.append("bob", "created task", Some("write report"))
            .await
            .unwrap();

        let payload = log.list().await.unwrap();
        assert_eq!(payload.logs.len(), 2);
        assert_eq!(payload.logs[0].user, "alice");
        assert_eq!(payload.logs[0].action, "joined document");
        assert_eq!(payload.logs[1].details.as_deref(), Some("write report"));
    }

    #[tokio::test]
    async fn entries_carry_a_formatted_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("activity.json"));

        log.append("alice", "logged in", None).await.unwrap();

        let payload = log.list().await.unwrap();
        let timestamp = &payload.logs[0].timestamp;
        assert!(
            chrono::NaiveDateTime::parse_from_str(timestamp, crate::models::DATETIME_FMT).is_ok(),
            "unexpected timestamp format: {timestamp}"
        );
    }
}
