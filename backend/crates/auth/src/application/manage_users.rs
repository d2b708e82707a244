//! Manage Users Use Case
//!
//! Admin-only user administration: listing, role changes, deletion.

use std::sync::Arc;

use crate::application::access_gate::{Identity, authorize};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// Manage users use case
pub struct ManageUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ManageUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all users, newest first
    pub async fn list(&self, identity: &Identity) -> AuthResult<Vec<User>> {
        authorize(UserRole::Admin, identity)?;
        self.repo.list_users().await
    }

    /// Change a user's role. Takes effect on the target's next login;
    /// tokens already issued keep their role snapshot until they expire.
    pub async fn set_role(
        &self,
        identity: &Identity,
        user_id: &UserId,
        role: UserRole,
    ) -> AuthResult<()> {
        authorize(UserRole::Admin, identity)?;
        self.repo.update_role(user_id, role).await?;

        tracing::info!(user_id = %user_id, role = %role, "User role changed");
        Ok(())
    }

    /// Delete a user account. Existing tokens for the account die at the
    /// next resolution, since the user no longer exists.
    pub async fn delete(&self, identity: &Identity, user_id: &UserId) -> AuthResult<()> {
        authorize(UserRole::Admin, identity)?;
        self.repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
