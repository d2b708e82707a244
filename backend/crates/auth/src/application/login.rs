//! Login Use Case
//!
//! Verifies credentials and issues a signed session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::RawPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Session token for the cookie
    pub session_token: String,
    pub user_id: UserId,
    pub role: UserRole,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Authenticate a user.
    ///
    /// Every failure path returns [`AuthError::InvalidCredentials`] so the
    /// response never reveals whether the email is registered.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // bcrypt is CPU-bound, keep it off the async workers
        let digest = user.password_hash.clone();
        let clear_text = raw_password.into_inner();
        let password_valid = tokio::task::spawn_blocking(move || digest.verify(&clear_text))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // The token carries a role snapshot taken now; it refreshes on the
        // next login, not when an admin changes the role.
        let session_token = self.config.session_issuer().issue(&user.user_id, user.role);

        tracing::info!(user_id = %user.user_id, role = %user.role, "User logged in");

        Ok(LoginOutput {
            session_token,
            user_id: user.user_id,
            role: user.role,
        })
    }
}
