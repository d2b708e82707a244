//! Content Routers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{FeedbackRepository, NewsRepository};
use crate::presentation::handlers::{self, ContentAppState};

/// Create the news router (public reads, editor mutations)
pub fn news_router<R>(repo: Arc<R>) -> Router
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState { repo };

    Router::new()
        .route("/", get(handlers::list_news::<R>))
        .route("/", post(handlers::create_news::<R>))
        .route("/{id}", get(handlers::get_news::<R>))
        .route("/{id}", put(handlers::update_news::<R>))
        .route("/{id}", delete(handlers::delete_news::<R>))
        .with_state(state)
}

/// Create the feedback router (public submission, admin administration)
pub fn feedback_router<R>(repo: Arc<R>) -> Router
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState { repo };

    Router::new()
        .route("/", post(handlers::submit_feedback::<R>))
        .route("/", get(handlers::list_feedback::<R>))
        .route("/{id}/answered", post(handlers::mark_feedback_answered::<R>))
        .with_state(state)
}
