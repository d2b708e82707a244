//! Identity Middleware
//!
//! Resolves the session cookie to an [`Identity`] once per request and
//! stores it in the request extensions. Handlers take `Identity` as an
//! extractor; routes not behind the middleware see [`Identity::Anonymous`].

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::convert::Infallible;
use std::sync::Arc;

use crate::application::access_gate::{Identity, ResolveIdentityUseCase};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

/// State for the identity-resolving middleware
#[derive(Clone)]
pub struct IdentityState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that resolves the session cookie into an [`Identity`].
///
/// Never rejects a request; anonymous and broken tokens both pass through
/// as [`Identity::Anonymous`]. Authorization happens in the use cases.
pub async fn resolve_identity<R>(
    State(state): State<IdentityState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case =
        ResolveIdentityUseCase::new(state.config.session_issuer(), state.repo.clone());
    let identity = use_case.execute(token.as_deref()).await;

    req.extensions_mut().insert(identity);

    next.run(req).await
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .copied()
            .unwrap_or(Identity::Anonymous))
    }
}
