//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub role: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
///
/// `full_name` is read from the user row at request time, so a rename shows
/// up immediately; `role` is the token snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub expires_at_ms: Option<i64>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            full_name: None,
            role: None,
            expires_at_ms: None,
        }
    }
}

// ============================================================================
// Change Password
// ============================================================================

/// Change password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// ============================================================================
// User Administration
// ============================================================================

/// User list item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub created_at_ms: i64,
}

impl From<&User> for UserListItem {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.into_uuid(),
            full_name: user.full_name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.code().to_string(),
            created_at_ms: user.created_at.timestamp_millis(),
        }
    }
}

/// Set role request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    /// "participant" | "editor" | "admin"
    pub role: String,
}
