//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

use auth::Identity;

use crate::application::{FeedbackService, NewsService};
use crate::domain::entity::{FeedbackId, NewsId};
use crate::domain::repository::{FeedbackRepository, NewsRepository};
use crate::error::ContentResult;
use crate::presentation::dto::{
    FeedbackRequest, FeedbackResponse, NewsListItemResponse, NewsRequest, NewsResponse,
};

/// Shared state for content handlers
#[derive(Clone)]
pub struct ContentAppState<R>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// News
// ============================================================================

/// GET /api/news
pub async fn list_news<R>(
    State(state): State<ContentAppState<R>>,
) -> ContentResult<Json<Vec<NewsListItemResponse>>>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let items = NewsService::new(state.repo.clone()).list().await?;

    Ok(Json(items.iter().map(NewsListItemResponse::from).collect()))
}

/// GET /api/news/{id}
pub async fn get_news<R>(
    State(state): State<ContentAppState<R>>,
    Path(news_id): Path<Uuid>,
) -> ContentResult<Json<NewsResponse>>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let news = NewsService::new(state.repo.clone())
        .get_by_id(&NewsId::from_uuid(news_id))
        .await?;

    Ok(Json(NewsResponse::from(&news)))
}

/// POST /api/news
pub async fn create_news<R>(
    State(state): State<ContentAppState<R>>,
    identity: Identity,
    Json(req): Json<NewsRequest>,
) -> ContentResult<(StatusCode, Json<NewsResponse>)>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let news = NewsService::new(state.repo.clone())
        .create(&identity, req.into_draft())
        .await?;

    Ok((StatusCode::CREATED, Json(NewsResponse::from(&news))))
}

/// PUT /api/news/{id}
pub async fn update_news<R>(
    State(state): State<ContentAppState<R>>,
    identity: Identity,
    Path(news_id): Path<Uuid>,
    Json(req): Json<NewsRequest>,
) -> ContentResult<Json<NewsResponse>>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let news = NewsService::new(state.repo.clone())
        .update(&identity, &NewsId::from_uuid(news_id), req.into_draft())
        .await?;

    Ok(Json(NewsResponse::from(&news)))
}

/// DELETE /api/news/{id}
pub async fn delete_news<R>(
    State(state): State<ContentAppState<R>>,
    identity: Identity,
    Path(news_id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    NewsService::new(state.repo.clone())
        .delete(&identity, &NewsId::from_uuid(news_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Feedback
// ============================================================================

/// POST /api/feedback
pub async fn submit_feedback<R>(
    State(state): State<ContentAppState<R>>,
    Json(req): Json<FeedbackRequest>,
) -> ContentResult<(StatusCode, Json<FeedbackResponse>)>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let feedback = FeedbackService::new(state.repo.clone())
        .submit(req.name, req.email, req.message)
        .await?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))))
}

/// GET /api/feedback
pub async fn list_feedback<R>(
    State(state): State<ContentAppState<R>>,
    identity: Identity,
) -> ContentResult<Json<Vec<FeedbackResponse>>>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let entries = FeedbackService::new(state.repo.clone())
        .list(&identity)
        .await?;

    Ok(Json(entries.iter().map(FeedbackResponse::from).collect()))
}

/// POST /api/feedback/{id}/answered
pub async fn mark_feedback_answered<R>(
    State(state): State<ContentAppState<R>>,
    identity: Identity,
    Path(feedback_id): Path<Uuid>,
) -> ContentResult<StatusCode>
where
    R: NewsRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    FeedbackService::new(state.repo.clone())
        .mark_answered(&identity, &FeedbackId::from_uuid(feedback_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
