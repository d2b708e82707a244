//! Access Gate
//!
//! The single authorization decision point. Requests resolve to an
//! [`Identity`] once, early in the pipeline; protected operations then call
//! [`authorize`] with the minimum role they require. Roles are strictly
//! ordered (participant < editor < admin), so a single comparison covers
//! every tier.

use std::sync::Arc;

use crate::application::session::SessionIssuer;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Who is making the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// No token, or a token that failed verification
    Anonymous,
    /// A verified token for an existing user
    Authenticated { user_id: UserId, role: UserRole },
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::Authenticated { user_id, .. } => Some(*user_id),
            Identity::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Identity::Authenticated { role, .. } => Some(*role),
            Identity::Anonymous => None,
        }
    }
}

/// Check that `identity` holds at least `required`.
///
/// Anonymous callers get [`AuthError::Unauthenticated`] (401); authenticated
/// callers below the required tier get [`AuthError::AccessDenied`] (403).
pub fn authorize(required: UserRole, identity: &Identity) -> AuthResult<()> {
    match identity {
        Identity::Anonymous => Err(AuthError::Unauthenticated),
        Identity::Authenticated { role, .. } => {
            if *role >= required {
                Ok(())
            } else {
                Err(AuthError::AccessDenied)
            }
        }
    }
}

/// Resolves a raw cookie value to an [`Identity`]
pub struct ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    issuer: SessionIssuer,
    repo: Arc<R>,
}

impl<R> ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    pub fn new(issuer: SessionIssuer, repo: Arc<R>) -> Self {
        Self { issuer, repo }
    }

    /// Resolve a token to an identity.
    ///
    /// Any defect degrades to [`Identity::Anonymous`]: missing token, bad
    /// signature, expiry, or a user that was deleted after the token was
    /// issued. A repository failure also degrades rather than erroring; an
    /// unreadable directory must not turn public pages into 500s.
    pub async fn execute(&self, token: Option<&str>) -> Identity {
        let Some(token) = token else {
            return Identity::Anonymous;
        };

        let Some(claims) = self.issuer.parse(token) else {
            return Identity::Anonymous;
        };

        // The token role is a snapshot; existence is re-checked so deleted
        // accounts lose access immediately.
        match self.repo.find_by_id(&claims.user_id).await {
            Ok(Some(_)) => Identity::Authenticated {
                user_id: claims.user_id,
                role: claims.role,
            },
            Ok(None) => Identity::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Identity resolution failed, treating as anonymous");
                Identity::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole) -> Identity {
        Identity::Authenticated {
            user_id: UserId::new(),
            role,
        }
    }

    #[test]
    fn test_anonymous_is_unauthenticated() {
        let err = authorize(UserRole::Participant, &Identity::Anonymous).unwrap_err();
        assert!(matches!(err, AuthError::Unauthenticated));
    }

    #[test]
    fn test_insufficient_role_is_denied() {
        let err = authorize(UserRole::Admin, &identity(UserRole::Editor)).unwrap_err();
        assert!(matches!(err, AuthError::AccessDenied));
    }

    #[test]
    fn test_role_ordering_admits_higher_tiers() {
        assert!(authorize(UserRole::Editor, &identity(UserRole::Editor)).is_ok());
        assert!(authorize(UserRole::Editor, &identity(UserRole::Admin)).is_ok());
        assert!(authorize(UserRole::Participant, &identity(UserRole::Participant)).is_ok());
        assert!(authorize(UserRole::Editor, &identity(UserRole::Participant)).is_err());
    }
}
