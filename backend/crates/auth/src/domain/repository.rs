//! User Repository Interface

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::PasswordDigest, user_role::UserRole,
};
use crate::error::AuthResult;

/// Persistence boundary for user accounts.
///
/// Implementations must treat the email column as unique and surface a
/// duplicate insert as [`AuthError::EmailTaken`](crate::error::AuthError::EmailTaken).
/// Mutations addressed to an absent id return
/// [`AuthError::UserNotFound`](crate::error::AuthError::UserNotFound).
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user in a single atomic write.
    async fn insert(&self, user: &User) -> AuthResult<()>;

    /// Look up a user by id.
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Look up a user by email (already normalized by [`Email`]).
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Cheap existence probe used before hashing a registration password.
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Replace the stored credential digest.
    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordDigest,
    ) -> AuthResult<()>;

    /// Change a user's role.
    async fn update_role(&self, user_id: &UserId, role: UserRole) -> AuthResult<()>;

    /// Remove a user account.
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;

    /// All users, newest first. Admin listing only.
    async fn list_users(&self) -> AuthResult<Vec<User>>;
}
