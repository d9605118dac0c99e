use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::models::{ErrorResponse, Task, TaskDeletedResponse, TaskResponse};
use crate::state::AppState;

/// List all tasks
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state.tasks.load().await.map_err(|e| {
        error!("Failed to read tasks: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read tasks: {}", e),
        )
    })?;
    Ok(Json(payload.tasks))
}

/// Create a new task; the id is assigned server-side
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Task>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, Json<ErrorResponse>)> {
    let created = state
        .tasks
        .update(|payload| {
            let mut task = task.clone();
            task.id = Some(payload.tasks.len() as u32 + 1);
            payload.tasks.push(task.clone());
            task
        })
        .await
        .map_err(|e| {
            error!("Failed to create task: {}", e);
            ErrorResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create task: {}", e),
            )
        })?;

    record_activity(&state, &created.assigned_to, "created task", Some(&created.title)).await;

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            status: "success".to_string(),
            data: created,
        }),
    ))
}

/// Update an existing task
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<u32>,
    Json(task): Json<Task>,
) -> Result<Json<TaskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let updated = state
        .tasks
        .update(|payload| {
            let slot = payload
                .tasks
                .iter_mut()
                .find(|existing| existing.id == Some(task_id))?;
            let mut task = task.clone();
            task.id = Some(task_id);
            *slot = task.clone();
            Some(task)
        })
        .await
        .map_err(|e| {
            error!("Failed to update task {}: {}", task_id, e);
            ErrorResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to update task: {}", e),
            )
        })?;

    match updated {
        Some(task) => {
            record_activity(
                &state,
                &task.assigned_to,
                "updated task",
                Some(&task_id.to_string()),
            )
            .await;
            Ok(Json(TaskResponse {
                status: "success".to_string(),
                data: task,
            }))
        }
        None => Err(ErrorResponse::reply(
            StatusCode::NOT_FOUND,
            "Task not found",
        )),
    }
}

/// Delete a task
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<u32>,
) -> Result<Json<TaskDeletedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state
        .tasks
        .update(|payload| {
            let idx = payload
                .tasks
                .iter()
                .position(|existing| existing.id == Some(task_id))?;
            Some(payload.tasks.remove(idx))
        })
        .await
        .map_err(|e| {
            error!("Failed to delete task {}: {}", task_id, e);
            ErrorResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to delete task: {}", e),
            )
        })?;

    match deleted {
        Some(task) => {
            record_activity(
                &state,
                &task.assigned_to,
                "deleted task",
                Some(&task_id.to_string()),
            )
            .await;
            Ok(Json(TaskDeletedResponse {
                status: "success".to_string(),
                data: format!("Task {} deleted", task_id),
            }))
        }
        None => Err(ErrorResponse::reply(
            StatusCode::NOT_FOUND,
            "Task not found",
        )),
    }
}

async fn record_activity(state: &AppState, user: &str, action: &str, details: Option<&str>) {
    if let Err(e) = state.activity.append(user, action, details).await {
        error!("Failed to record activity '{}' for {}: {}", action, user, e);
    }
}
