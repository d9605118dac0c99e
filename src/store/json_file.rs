use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::StoreError;

/// One JSON file holding a single payload value.
///
/// Reads and writes are serialized by a mutex. Writes go to a `.tmp`
/// sibling first and are moved into place with a rename, so readers never
/// observe a partially written file. Loading a file that does not exist
/// yields the payload's default value.
pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _payload: PhantomData<T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _payload: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current payload
    pub async fn load(&self) -> Result<T, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_locked().await
    }

    /// Replace the payload in full
    pub async fn save(&self, value: &T) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.write_locked(value).await
    }

    /// Read, apply `apply` to the payload, and write the result back,
    /// all under one lock hold.
    pub async fn update<R>(&self, apply: impl FnOnce(&mut T) -> R) -> Result<R, StoreError> {
        let _guard = self.lock.lock().await;
        let mut value = self.read_locked().await?;
        let out = apply(&mut value);
        self.write_locked(&value).await?;
        Ok(out)
    }

    async fn read_locked(&self) -> Result<T, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::decode(&self.path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    async fn write_locked(&self, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let raw =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::encode(&self.path, e))?;

        // Atomic replace: write a sibling and rename it into place
        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}
