use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{
    CreateUserRequest, ErrorResponse, LoginData, LoginRequest, LoginResponse, LogoutRequest,
    MessageResponse, Role, User, UserCreatedResponse, UserListResponse,
};
use crate::state::AppState;

/// List all users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state.users.load().await.map_err(|e| {
        error!("Failed to read users: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read users: {}", e),
        )
    })?;

    Ok(Json(UserListResponse {
        status: "success".to_string(),
        data: payload.users,
    }))
}

/// Create a new user. Only an Admin creator may do this.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), (StatusCode, Json<ErrorResponse>)> {
    if request.creator.is_empty() || request.username.is_empty() || request.password.is_empty() {
        return Err(ErrorResponse::reply(
            StatusCode::BAD_REQUEST,
            "Missing required fields.",
        ));
    }

    let mut payload = state.users.load().await.map_err(|e| {
        error!("Failed to read users: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read users: {}", e),
        )
    })?;

    // Verify the creator is an Admin
    let creator = payload
        .users
        .iter()
        .find(|user| user.username == request.creator);
    match creator {
        Some(user) if user.role == Role::Admin => {}
        _ => {
            return Err(ErrorResponse::reply(
                StatusCode::FORBIDDEN,
                "Only Admins can create users.",
            ));
        }
    }

    // Reject duplicate usernames
    if payload
        .users
        .iter()
        .any(|user| user.username == request.username)
    {
        return Err(ErrorResponse::reply(
            StatusCode::BAD_REQUEST,
            "Username already exists.",
        ));
    }

    let new_user = User {
        id: payload.users.len() as u32 + 1,
        username: request.username.clone(),
        password: request.password,
        role: request.role,
    };
    payload.users.push(new_user.clone());

    state.users.save(&payload).await.map_err(|e| {
        error!("Failed to save users: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to create user: {}", e),
        )
    })?;

    record_activity(&state, &request.creator, "created user", Some(&request.username)).await;
    info!("User {} created by {}", new_user.username, request.creator);

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            status: "success".to_string(),
            data: new_user,
        }),
    ))
}

/// Authenticate a user and return role information
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state.users.load().await.map_err(|e| {
        error!("Failed to read users: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to log in: {}", e),
        )
    })?;

    let user = payload
        .users
        .iter()
        .find(|user| user.username == request.username && user.password == request.password);

    match user {
        Some(user) => {
            record_activity(&state, &user.username, "logged in", None).await;
            Ok(Json(LoginResponse {
                status: "success".to_string(),
                data: LoginData {
                    username: user.username.clone(),
                    role: user.role,
                },
            }))
        }
        None => Err(ErrorResponse::reply(
            StatusCode::UNAUTHORIZED,
            "Invalid username or password",
        )),
    }
}

/// Log a user out and record the activity
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let payload = state.users.load().await.map_err(|e| {
        error!("Failed to read users: {}", e);
        ErrorResponse::reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to log out: {}", e),
        )
    })?;

    if !payload
        .users
        .iter()
        .any(|user| user.username == request.username)
    {
        return Err(ErrorResponse::reply(
            StatusCode::NOT_FOUND,
            "User not found.",
        ));
    }

    record_activity(&state, &request.username, "logged out", None).await;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: format!("{} logged out successfully.", request.username),
    }))
}

// Activity bookkeeping is best effort for the CRUD endpoints
async fn record_activity(state: &AppState, user: &str, action: &str, details: Option<&str>) {
    if let Err(e) = state.activity.append(user, action, details).await {
        error!("Failed to record activity '{}' for {}: {}", action, user, e);
    }
}
