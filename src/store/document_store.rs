use std::path::{Path, PathBuf};

use super::{JsonFile, StoreError};
use crate::models::{Document, DocumentPayload};

/// The single shared document, persisted as `{"document": {...}}`.
///
/// `set` replaces the document in full under the file lock, so concurrent
/// writers resolve by whichever write completes last.
pub struct DocumentStore {
    file: JsonFile<DocumentPayload>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn get(&self) -> Result<Document, StoreError> {
        Ok(self.file.load().await?.document)
    }

    pub async fn set(&self, document: Document) -> Result<(), StoreError> {
        self.file.save(&DocumentPayload { document }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_store_returns_the_default_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("document.json"));

        let document = store.get().await.unwrap();
        assert_eq!(document.title, "Untitled Document");
        assert!(document.content.is_empty());
    }

    #[tokio::test]
    async fn set_then_get_returns_the_document_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("document.json"));

        let written = Document {
            title: "Minutes".to_string(),
            content: "agenda".to_string(),
            last_edited_by: "alice".to_string(),
            last_updated: "2026-08-07 12:00:00".to_string(),
        };
        store.set(written.clone()).await.unwrap();

        assert_eq!(store.get().await.unwrap(), written);
    }

    #[tokio::test]
    async fn last_completed_set_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("document.json"));

        let mut doc = Document::default();
        doc.content = "from a".to_string();
        store.set(doc.clone()).await.unwrap();
        doc.content = "from b".to_string();
        store.set(doc.clone()).await.unwrap();

        assert_eq!(store.get().await.unwrap().content, "from b");
    }
}
