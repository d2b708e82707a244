//! Auth (Authentication & Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration/login with email + password
//! - Stateless signed session tokens delivered as HttpOnly cookies
//! - Role-based access (Participant, Editor, Admin)
//! - Admin user management (list, change role, delete)
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (per-call random salt, cost 10)
//! - Session tokens HMAC-SHA256 signed; a forged or tampered token is
//!   indistinguishable from no token
//! - Login failure never reveals whether the email exists
//! - Every privileged operation re-checks the access gate server-side

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::access_gate::{Identity, authorize};
pub use application::config::AuthConfig;
pub use application::session::{SessionClaims, SessionIssuer};
pub use domain::repository::UserRepository;
pub use domain::value_object::user_id::UserId;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserDirectory;
pub use presentation::router::{auth_router, users_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
