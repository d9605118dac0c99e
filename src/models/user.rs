use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role, checked by the user-creation endpoint only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

/// A user account. Passwords are stored in the clear; this is a demo
/// backend and credential handling is out of scope.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// On-disk payload of users.json
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UsersPayload {
    pub users: Vec<User>,
}

/// Request body for logging in
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for creating a user
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateUserRequest {
    pub creator: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Viewer
}

/// Request body for logging out
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LogoutRequest {
    pub username: String,
}

/// Response for listing users
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub status: String,
    pub data: Vec<User>,
}

/// Response for creating a user
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserCreatedResponse {
    pub status: String,
    pub data: User,
}

/// Identity returned on a successful login
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginData {
    pub username: String,
    pub role: Role,
}

/// Response for a successful login
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub data: LoginData,
}

/// Response carrying only a status and a human-readable message
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}
