//! Change Password Use Case
//!
//! Replaces a user's credential after verifying the current one.

use std::sync::Arc;

use crate::application::access_gate::Identity;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{PasswordDigest, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Change the caller's own password. Existing session tokens stay valid
    /// until they expire; only the stored digest changes.
    pub async fn execute(&self, identity: &Identity, input: ChangePasswordInput) -> AuthResult<()> {
        let user_id = match identity {
            Identity::Authenticated { user_id, .. } => *user_id,
            Identity::Anonymous => return Err(AuthError::Unauthenticated),
        };

        // Validate the new password before verifying the old one
        let new_password = RawPassword::new(input.new_password)?;
        let old_password =
            RawPassword::new(input.old_password).map_err(|_| AuthError::WrongOldPassword)?;

        let user = self
            .repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let digest = user.password_hash.clone();
        let old_clear = old_password.into_inner();
        let old_valid = tokio::task::spawn_blocking(move || digest.verify(&old_clear))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !old_valid {
            return Err(AuthError::WrongOldPassword);
        }

        let cost = self.config.bcrypt_cost;
        let new_clear = new_password.into_inner();
        let hashed = tokio::task::spawn_blocking(move || new_clear.hash(cost))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        self.repo
            .update_password_hash(&user_id, &PasswordDigest::from_hashed(hashed))
            .await?;

        tracing::info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
