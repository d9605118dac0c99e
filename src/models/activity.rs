use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A logged user action
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub details: Option<String>,
}

/// On-disk payload of activity.json
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ActivityPayload {
    pub logs: Vec<ActivityEntry>,
}

/// Request body for logging an activity entry
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ActivityRequest {
    pub user: String,
    pub action: String,
    #[serde(default)]
    pub details: Option<String>,
}
