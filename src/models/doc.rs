use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The single shared editable document.
///
/// `last_edited_by` and `last_updated` are decided by the server on every
/// accepted write; client-supplied values for these fields are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub content: String,
    pub last_edited_by: String,
    pub last_updated: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: "Untitled Document".to_string(),
            content: String::new(),
            last_edited_by: String::new(),
            last_updated: String::new(),
        }
    }
}

/// On-disk payload of document.json
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DocumentPayload {
    pub document: Document,
}

/// Response carrying the shared document
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub status: String,
    pub data: Document,
}
