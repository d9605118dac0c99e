pub mod activity_log;
pub mod document_store;
pub mod json_file;

pub use activity_log::ActivityLog;
pub use document_store::DocumentStore;
pub use json_file::JsonFile;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the JSON file stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn decode(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn encode(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Encode {
            path: path.to_path_buf(),
            source,
        }
    }
}
