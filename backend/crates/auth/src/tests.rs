//! Scenario tests running the use cases against an in-memory directory.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::access_gate::{Identity, ResolveIdentityUseCase, authorize};
use crate::application::change_password::{ChangePasswordInput, ChangePasswordUseCase};
use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::manage_users::ManageUsersUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::PasswordDigest, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory directory
// ============================================================================

#[derive(Clone, Default)]
struct MemoryDirectory {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserRepository for MemoryDirectory {
    async fn insert(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(user.user_id.into_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| &u.email == email))
    }

    async fn update_password_hash(
        &self,
        user_id: &UserId,
        password_hash: &PasswordDigest,
    ) -> AuthResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id.as_uuid())
            .ok_or(AuthError::UserNotFound)?;
        user.password_hash = password_hash.clone();
        user.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn update_role(&self, user_id: &UserId, role: UserRole) -> AuthResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id.as_uuid())
            .ok_or(AuthError::UserNotFound)?;
        user.role = role;
        user.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        self.users
            .write()
            .await
            .remove(user_id.as_uuid())
            .map(|_| ())
            .ok_or(AuthError::UserNotFound)
    }

    async fn list_users(&self) -> AuthResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        bcrypt_cost: 4, // keep the test suite fast
        ..AuthConfig::with_random_secret()
    })
}

struct Harness {
    repo: Arc<MemoryDirectory>,
    config: Arc<AuthConfig>,
}

impl Harness {
    fn new() -> Self {
        Self {
            repo: Arc::new(MemoryDirectory::default()),
            config: test_config(),
        }
    }

    async fn register(&self, full_name: &str, email: &str, password: &str) -> AuthResult<UserId> {
        let use_case = RegisterUseCase::new(self.repo.clone(), self.config.clone());
        let output = use_case
            .execute(RegisterInput {
                full_name: full_name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok(output.user_id)
    }

    async fn login(&self, email: &str, password: &str) -> AuthResult<(UserId, UserRole, String)> {
        let use_case = LoginUseCase::new(self.repo.clone(), self.config.clone());
        let output = use_case
            .execute(LoginInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        Ok((output.user_id, output.role, output.session_token))
    }

    async fn resolve(&self, token: &str) -> Identity {
        ResolveIdentityUseCase::new(self.config.session_issuer(), self.repo.clone())
            .execute(Some(token))
            .await
    }

    fn admin_identity(&self) -> Identity {
        Identity::Authenticated {
            user_id: UserId::new(),
            role: UserRole::Admin,
        }
    }
}

// ============================================================================
// Registration and login
// ============================================================================

#[tokio::test]
async fn test_register_then_login_returns_same_user() {
    let h = Harness::new();

    let registered = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let (logged_in, role, token) = h.login("ivan@example.com", "secret1").await.unwrap();

    assert_eq!(registered, logged_in);
    assert_eq!(role, UserRole::Participant);
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_normalizes_email_case() {
    let h = Harness::new();
    h.register("Иван Иванов", "Ivan@Example.COM", "secret1")
        .await
        .unwrap();

    assert!(h.login("ivan@example.com", "secret1").await.is_ok());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let h = Harness::new();
    h.register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let err = h
        .register("Другой Иван", "ivan@example.com", "another1")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::EmailTaken));
    assert_eq!(h.repo.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_login_failure_does_not_reveal_which_part_was_wrong() {
    let h = Harness::new();
    h.register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let unknown_email = h.login("nobody@example.com", "secret1").await.unwrap_err();
    let wrong_password = h.login("ivan@example.com", "wrong-pass").await.unwrap_err();

    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    assert_eq!(
        unknown_email.status_code(),
        wrong_password.status_code()
    );
}

#[tokio::test]
async fn test_short_password_is_rejected_before_any_write() {
    let h = Harness::new();

    let err = h
        .register("Иван Иванов", "ivan@example.com", "12345")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    assert!(h.repo.list_users().await.unwrap().is_empty());
}

// ============================================================================
// Change password
// ============================================================================

#[tokio::test]
async fn test_change_password_flips_which_password_works() {
    let h = Harness::new();
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let identity = Identity::Authenticated {
        user_id,
        role: UserRole::Participant,
    };

    let use_case = ChangePasswordUseCase::new(h.repo.clone(), h.config.clone());
    use_case
        .execute(
            &identity,
            ChangePasswordInput {
                old_password: "secret1".to_string(),
                new_password: "newsecret".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(matches!(
        h.login("ivan@example.com", "secret1").await.unwrap_err(),
        AuthError::InvalidCredentials
    ));
    assert!(h.login("ivan@example.com", "newsecret").await.is_ok());
}

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let h = Harness::new();
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let identity = Identity::Authenticated {
        user_id,
        role: UserRole::Participant,
    };

    let use_case = ChangePasswordUseCase::new(h.repo.clone(), h.config.clone());
    let err = use_case
        .execute(
            &identity,
            ChangePasswordInput {
                old_password: "not-the-password".to_string(),
                new_password: "newsecret".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::WrongOldPassword));
    // Old password still works
    assert!(h.login("ivan@example.com", "secret1").await.is_ok());
}

#[tokio::test]
async fn test_change_password_requires_authentication() {
    let h = Harness::new();

    let use_case = ChangePasswordUseCase::new(h.repo.clone(), h.config.clone());
    let err = use_case
        .execute(
            &Identity::Anonymous,
            ChangePasswordInput {
                old_password: "secret1".to_string(),
                new_password: "newsecret".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Unauthenticated));
}

// ============================================================================
// Identity resolution
// ============================================================================

#[tokio::test]
async fn test_token_for_deleted_user_resolves_to_anonymous() {
    let h = Harness::new();
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();
    let (_, _, token) = h.login("ivan@example.com", "secret1").await.unwrap();

    assert!(h.resolve(&token).await.is_authenticated());

    ManageUsersUseCase::new(h.repo.clone())
        .delete(&h.admin_identity(), &user_id)
        .await
        .unwrap();

    assert_eq!(h.resolve(&token).await, Identity::Anonymous);
}

#[tokio::test]
async fn test_role_in_token_is_a_login_time_snapshot() {
    let h = Harness::new();
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();
    let (_, _, old_token) = h.login("ivan@example.com", "secret1").await.unwrap();

    ManageUsersUseCase::new(h.repo.clone())
        .set_role(&h.admin_identity(), &user_id, UserRole::Editor)
        .await
        .unwrap();

    // Pre-promotion token still carries the participant snapshot
    let stale = h.resolve(&old_token).await;
    assert_eq!(stale.role(), Some(UserRole::Participant));
    assert!(matches!(
        authorize(UserRole::Editor, &stale),
        Err(AuthError::AccessDenied)
    ));

    // A fresh login picks up the new role
    let (_, _, new_token) = h.login("ivan@example.com", "secret1").await.unwrap();
    let fresh = h.resolve(&new_token).await;
    assert_eq!(fresh.role(), Some(UserRole::Editor));
    assert!(authorize(UserRole::Editor, &fresh).is_ok());
}

#[tokio::test]
async fn test_garbage_and_missing_tokens_resolve_to_anonymous() {
    let h = Harness::new();

    let resolver = ResolveIdentityUseCase::new(h.config.session_issuer(), h.repo.clone());
    assert_eq!(resolver.execute(None).await, Identity::Anonymous);
    assert_eq!(
        resolver.execute(Some("not-a-token")).await,
        Identity::Anonymous
    );
    assert_eq!(resolver.execute(Some("a.b")).await, Identity::Anonymous);
}

// ============================================================================
// Session status endpoint
// ============================================================================

#[tokio::test]
async fn test_session_status_reports_the_display_name() {
    use axum::extract::State;
    use axum::http::{HeaderMap, header};

    use crate::presentation::handlers::{AuthAppState, session_status};

    let h = Harness::new();
    h.register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();
    let (user_id, _, token) = h.login("ivan@example.com", "secret1").await.unwrap();

    let state = AuthAppState {
        repo: h.repo.clone(),
        config: h.config.clone(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        format!("{}={}", h.config.session_cookie_name, token)
            .parse()
            .unwrap(),
    );

    let body = session_status(State(state.clone()), headers)
        .await
        .unwrap()
        .0;
    assert!(body.authenticated);
    assert_eq!(body.user_id, Some(user_id.into_uuid()));
    assert_eq!(body.full_name.as_deref(), Some("Иван Иванов"));
    assert_eq!(body.role.as_deref(), Some("participant"));
    assert!(body.expires_at_ms.is_some());

    // Without a cookie the same endpoint reports an anonymous session
    let body = session_status(State(state), HeaderMap::new())
        .await
        .unwrap()
        .0;
    assert!(!body.authenticated);
    assert!(body.full_name.is_none());
}

// ============================================================================
// User administration
// ============================================================================

#[tokio::test]
async fn test_user_administration_is_admin_only() {
    let h = Harness::new();
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();

    let use_case = ManageUsersUseCase::new(h.repo.clone());

    let editor = Identity::Authenticated {
        user_id: UserId::new(),
        role: UserRole::Editor,
    };

    assert!(matches!(
        use_case.list(&editor).await.unwrap_err(),
        AuthError::AccessDenied
    ));
    assert!(matches!(
        use_case
            .set_role(&editor, &user_id, UserRole::Admin)
            .await
            .unwrap_err(),
        AuthError::AccessDenied
    ));
    assert!(matches!(
        use_case.delete(&Identity::Anonymous, &user_id).await.unwrap_err(),
        AuthError::Unauthenticated
    ));
}

#[tokio::test]
async fn test_role_change_for_missing_user_is_not_found() {
    let h = Harness::new();
    let use_case = ManageUsersUseCase::new(h.repo.clone());

    let err = use_case
        .set_role(&h.admin_identity(), &UserId::new(), UserRole::Editor)
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound));
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn test_participant_promotion_lifecycle() {
    let h = Harness::new();

    // Register and log in as a regular participant
    let user_id = h
        .register("Иван Иванов", "ivan@example.com", "secret1")
        .await
        .unwrap();
    let (_, role, token) = h.login("ivan@example.com", "secret1").await.unwrap();
    assert_eq!(role, UserRole::Participant);

    // Participants cannot pass the editor gate
    let identity = h.resolve(&token).await;
    assert!(authorize(UserRole::Editor, &identity).is_err());

    // An admin promotes them to editor
    ManageUsersUseCase::new(h.repo.clone())
        .set_role(&h.admin_identity(), &user_id, UserRole::Editor)
        .await
        .unwrap();

    // After re-login the editor gate opens, the admin gate stays shut
    let (_, role, token) = h.login("ivan@example.com", "secret1").await.unwrap();
    assert_eq!(role, UserRole::Editor);

    let identity = h.resolve(&token).await;
    assert!(authorize(UserRole::Editor, &identity).is_ok());
    assert!(authorize(UserRole::Admin, &identity).is_err());
}
