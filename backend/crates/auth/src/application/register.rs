//! Register Use Case
//!
//! Creates a new user account with the default participant role.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, full_name::FullName, user_id::UserId,
    user_password::{PasswordDigest, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate inputs before doing any expensive work
        let full_name = FullName::new(&input.full_name)?;
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        // Early duplicate probe; the unique index still catches races
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // bcrypt is CPU-bound, keep it off the async workers
        let cost = self.config.bcrypt_cost;
        let clear_text = raw_password.into_inner();
        let hashed = tokio::task::spawn_blocking(move || clear_text.hash(cost))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = User::new(full_name, email, PasswordDigest::from_hashed(hashed));
        self.repo.insert(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
