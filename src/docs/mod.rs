use utoipa::OpenApi;

use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All user accounts", body = UserListResponse)
    )
)]
#[allow(dead_code)]
pub async fn list_users_doc() {}

/// Create a new user (Admin-only)
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserCreatedResponse),
        (status = 403, description = "Creator is not an Admin", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_user_doc() {}

/// Authenticate a user
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn login_doc() {}

/// List all tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All tasks", body = [Task])
    )
)]
#[allow(dead_code)]
pub async fn list_tasks_doc() {}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = Task,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_task_doc() {}

/// Update an existing task
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    params(
        ("task_id" = u32, Path, description = "Task identifier")
    ),
    request_body = Task,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_task_doc() {}

/// Get the shared document
#[utoipa::path(
    get,
    path = "/api/document",
    responses(
        (status = 200, description = "The shared document", body = DocumentResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_document_doc() {}

/// Overwrite the shared document
#[utoipa::path(
    put,
    path = "/api/document",
    request_body = Document,
    responses(
        (status = 200, description = "Document updated", body = DocumentResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_document_doc() {}

/// Get the activity log
#[utoipa::path(
    get,
    path = "/api/activity",
    responses(
        (status = 200, description = "All activity entries", body = ActivityPayload)
    )
)]
#[allow(dead_code)]
pub async fn get_activity_doc() {}

/// Diagnostics endpoint
#[utoipa::path(
    get,
    path = "/api/diagnostics",
    responses(
        (status = 200, description = "Runtime diagnostics", body = DiagnosticsResponse)
    )
)]
#[allow(dead_code)]
pub async fn diagnostics_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        list_users_doc,
        create_user_doc,
        login_doc,
        list_tasks_doc,
        create_task_doc,
        update_task_doc,
        get_document_doc,
        update_document_doc,
        get_activity_doc,
        diagnostics_doc,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            User,
            Role,
            UsersPayload,
            UserListResponse,
            UserCreatedResponse,
            CreateUserRequest,
            LoginRequest,
            LoginResponse,
            LoginData,
            LogoutRequest,
            MessageResponse,
            Task,
            TaskStatus,
            TasksPayload,
            TaskResponse,
            TaskDeletedResponse,
            Document,
            DocumentPayload,
            DocumentResponse,
            ActivityEntry,
            ActivityPayload,
            ActivityRequest,
            DiagnosticsResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
