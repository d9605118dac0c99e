use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::error;

use crate::models::{now_timestamp, Document, DocumentResponse, ErrorResponse};
use crate::state::AppState;

/// Get the shared document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DocumentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let document = state.documents.get().await.map_err(|e| {
        error!("Failed to read document: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read document: {}", e),
        )
    })?;

    Ok(Json(DocumentResponse {
        status: "success".to_string(),
        data: document,
    }))
}

/// Overwrite the shared document. The update timestamp is stamped
/// server-side like on the WebSocket path.
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Json(mut document): Json<Document>,
) -> Result<Json<DocumentResponse>, (StatusCode, Json<ErrorResponse>)> {
    document.last_updated = now_timestamp();

    state.documents.set(document.clone()).await.map_err(|e| {
        error!("Failed to update document: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to update document: {}", e),
        )
    })?;

    if let Err(e) = state
        .activity
        .append(&document.last_edited_by, "edited document", None)
        .await
    {
        error!("Failed to record document edit: {}", e);
    }

    Ok(Json(DocumentResponse {
        status: "success".to_string(),
        data: document,
    }))
}
