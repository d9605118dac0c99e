use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    create_task, create_user, delete_task, diagnostics, get_activity, get_document, health_check,
    list_tasks, list_users, log_activity, login, logout, ready_check, update_document, update_task,
};
use crate::state::AppState;

/// Create API routes
pub fn create_api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/diagnostics", get(diagnostics))
        .route("/users", get(list_users).post(create_user))
        .route("/users/login", post(login))
        .route("/users/logout", post(logout))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:task_id", put(update_task).delete(delete_task))
        .route("/document", get(get_document).put(update_document))
        .route("/activity", get(get_activity).post(log_activity))
}
