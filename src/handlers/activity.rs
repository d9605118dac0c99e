use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::error;

use crate::models::{ActivityPayload, ActivityRequest, ErrorResponse, MessageResponse};
use crate::state::AppState;

/// Get all activity logs
pub async fn get_activity(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ActivityPayload>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state.activity.list().await.map_err(|e| {
        error!("Failed to read activity log: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read activity log: {}", e),
        )
    })?;
    Ok(Json(payload))
}

/// Log user activity
pub async fn log_activity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActivityRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .activity
        .append(&request.user, &request.action, request.details.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to append activity: {}", e);
            ErrorResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to append activity: {}", e),
            )
        })?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "Activity logged".to_string(),
    }))
}
