use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::models::{Document, Role, TasksPayload, User, UsersPayload};
use crate::store::{ActivityLog, DocumentStore, JsonFile, StoreError};
use crate::ws::{CollabService, ConnectionRegistry};

/// Shared application state: the JSON stores, the connection registry and
/// the collaboration service wired on top of them.
pub struct AppState {
    pub users: JsonFile<UsersPayload>,
    pub tasks: JsonFile<TasksPayload>,
    pub documents: Arc<DocumentStore>,
    pub activity: Arc<ActivityLog>,
    pub registry: Arc<ConnectionRegistry>,
    pub collab: Arc<CollabService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let data_dir = PathBuf::from(&config.data_dir);

        let documents = Arc::new(DocumentStore::new(data_dir.join("document.json")));
        let activity = Arc::new(ActivityLog::new(data_dir.join("activity.json")));
        let registry = Arc::new(ConnectionRegistry::new());
        let collab = Arc::new(CollabService::new(
            registry.clone(),
            documents.clone(),
            activity.clone(),
        ));

        Self {
            users: JsonFile::new(data_dir.join("users.json")),
            tasks: JsonFile::new(data_dir.join("tasks.json")),
            documents,
            activity,
            registry,
            collab,
        }
    }

    /// Seed default users, an empty activity log and the default document
    /// on first start.
    pub async fn seed_defaults(&self) -> Result<(), StoreError> {
        if !self.users.path().exists() {
            let defaults = UsersPayload {
                users: vec![
                    User {
                        id: 1,
                        username: "admin123".to_string(),
                        password: "admin123".to_string(),
                        role: Role::Admin,
                    },
                    User {
                        id: 2,
                        username: "editor123".to_string(),
                        password: "editor123".to_string(),
                        role: Role::Editor,
                    },
                    User {
                        id: 3,
                        username: "viewer123".to_string(),
                        password: "viewer123".to_string(),
                        role: Role::Viewer,
                    },
                ],
            };
            self.users.save(&defaults).await?;
            self.activity.ensure_exists().await?;
            info!("Seeded default users");
        }

        if !self.documents.path().exists() {
            self.documents.set(Document::default()).await?;
        }
        Ok(())
    }
}
