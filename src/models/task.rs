use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Progress state of a task
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

/// A single task entry. The id is assigned by the server on creation.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    pub assigned_to: String,
    pub status: TaskStatus,
}

/// On-disk payload of tasks.json
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct TasksPayload {
    pub tasks: Vec<Task>,
}

/// Response for creating or updating a task
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub status: String,
    pub data: Task,
}

/// Response for deleting a task
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TaskDeletedResponse {
    pub status: String,
    pub data: String,
}
