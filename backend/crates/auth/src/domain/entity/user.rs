//! User Entity
//!
//! An account: identity, display name, login key, credential digest, role.
//! The password digest is present from the moment the entity exists;
//! registration persists the whole row in one atomic insert.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, full_name::FullName, user_id::UserId, user_password::PasswordDigest,
    user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque unique id, assigned at creation, immutable
    pub user_id: UserId,
    /// Display-only full name
    pub full_name: FullName,
    /// Unique login key
    pub email: Email,
    /// bcrypt digest, never the plaintext
    pub password_hash: PasswordDigest,
    /// Privilege tier; mutable by admins only
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role (participant)
    pub fn new(full_name: FullName, email: Email, password_hash: PasswordDigest) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            full_name,
            email,
            password_hash,
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            FullName::new("Иван Иванов").unwrap(),
            Email::new("ivan@example.com").unwrap(),
            PasswordDigest::from_digest("$2b$04$placeholder"),
        )
    }

    #[test]
    fn test_new_user_defaults_to_participant() {
        let user = sample_user();
        assert_eq!(user.role, UserRole::Participant);
    }

    #[test]
    fn test_new_user_ids_are_unique() {
        assert_ne!(sample_user().user_id, sample_user().user_id);
    }
}
