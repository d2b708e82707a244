//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::access_gate::Identity;
use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase, ManageUsersUseCase,
    RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    SessionStatusResponse, SetRoleRequest, UserListItem,
};

/// Where the logout redirect lands
const LOGIN_PAGE: &str = "/auth/login";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            full_name: req.full_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: output.user_id.into_uuid(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            user_id: output.user_id.into_uuid(),
            role: output.role.code().to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Clears the cookie and redirects to the login page. Tokens are stateless,
/// so there is nothing server-side to revoke; a copied token stays valid
/// until it expires.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, cookie),
            (header::LOCATION, LOGIN_PAGE.to_string()),
        ],
    )
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    let Some(claims) = token.and_then(|t| state.config.session_issuer().parse(&t)) else {
        return Ok(Json(SessionStatusResponse::anonymous()));
    };

    // A deleted account reads as anonymous even with a valid token. The
    // row also supplies the display name for the signed-in header.
    match state.repo.find_by_id(&claims.user_id).await? {
        Some(user) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            user_id: Some(claims.user_id.into_uuid()),
            full_name: Some(user.full_name.as_str().to_string()),
            role: Some(claims.role.code().to_string()),
            expires_at_ms: Some(claims.expires_at_ms),
        })),
        None => Ok(Json(SessionStatusResponse::anonymous())),
    }
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /api/auth/password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(
            &identity,
            ChangePasswordInput {
                old_password: req.old_password,
                new_password: req.new_password,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// User Administration
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
) -> AuthResult<Json<Vec<UserListItem>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageUsersUseCase::new(state.repo.clone());
    let users = use_case.list(&identity).await?;

    Ok(Json(users.iter().map(UserListItem::from).collect()))
}

/// PUT /api/users/{id}/role
pub async fn set_user_role<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let role = UserRole::from_code(&req.role)
        .ok_or_else(|| AuthError::Validation(format!("Неизвестная роль: {}", req.role)))?;

    let use_case = ManageUsersUseCase::new(state.repo.clone());
    use_case
        .set_role(&identity, &UserId::from_uuid(user_id), role)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    identity: Identity,
    Path(user_id): Path<Uuid>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageUsersUseCase::new(state.repo.clone());
    use_case
        .delete(&identity, &UserId::from_uuid(user_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
