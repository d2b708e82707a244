//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{Feedback, News, NewsDraft, NewsListItem};

// ============================================================================
// News
// ============================================================================

/// News create/update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewsRequest {
    pub fn into_draft(self) -> NewsDraft {
        NewsDraft {
            title: self.title,
            summary: self.summary,
            content: self.content,
            main_image: self.main_image,
            images: self.images,
        }
    }
}

/// Single news article response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub news_id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub published_at_ms: i64,
    pub author_id: Uuid,
    pub main_image: Option<String>,
    pub images: Vec<String>,
}

impl From<&News> for NewsResponse {
    fn from(news: &News) -> Self {
        Self {
            news_id: news.news_id.into_uuid(),
            title: news.title.clone(),
            summary: news.summary.clone(),
            content: news.content.clone(),
            published_at_ms: news.published_at_ms,
            author_id: news.author_id,
            main_image: news.main_image.clone(),
            images: news.images.clone(),
        }
    }
}

/// News listing item with the resolved author byline
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItemResponse {
    #[serde(flatten)]
    pub news: NewsResponse,
    pub author_name: String,
}

impl From<&NewsListItem> for NewsListItemResponse {
    fn from(item: &NewsListItem) -> Self {
        Self {
            news: NewsResponse::from(&item.news),
            author_name: item.author_name.clone(),
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

/// Feedback submission request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Feedback entry response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub feedback_id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_answered: bool,
    pub created_at_ms: i64,
}

impl From<&Feedback> for FeedbackResponse {
    fn from(feedback: &Feedback) -> Self {
        Self {
            feedback_id: feedback.feedback_id.into_uuid(),
            name: feedback.name.clone(),
            email: feedback.email.clone(),
            message: feedback.message.clone(),
            is_answered: feedback.is_answered,
            created_at_ms: feedback.created_at.timestamp_millis(),
        }
    }
}
