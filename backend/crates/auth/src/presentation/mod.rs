//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and identity middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{IdentityState, resolve_identity};
pub use router::{auth_router, users_router};
