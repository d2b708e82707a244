//! Content Repository Interfaces

use crate::domain::entity::{Feedback, FeedbackId, News, NewsId, NewsListItem};
use crate::error::ContentResult;

/// Persistence boundary for news articles
#[trait_variant::make(NewsRepository: Send)]
pub trait LocalNewsRepository {
    /// Persist a new article.
    async fn insert(&self, news: &News) -> ContentResult<()>;

    /// Look up an article by id.
    async fn find_by_id(&self, news_id: &NewsId) -> ContentResult<Option<News>>;

    /// All articles newest-first with author names resolved.
    async fn list(&self) -> ContentResult<Vec<NewsListItem>>;

    /// Replace the stored article. `NewsNotFound` if the id is absent.
    async fn update(&self, news: &News) -> ContentResult<()>;

    /// Remove an article. `NewsNotFound` if the id is absent.
    async fn delete(&self, news_id: &NewsId) -> ContentResult<()>;
}

/// Persistence boundary for visitor feedback
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// Persist a new feedback entry.
    async fn insert(&self, feedback: &Feedback) -> ContentResult<()>;

    /// All feedback newest-first.
    async fn list(&self) -> ContentResult<Vec<Feedback>>;

    /// Flag a feedback entry as answered. `FeedbackNotFound` if absent.
    async fn mark_answered(&self, feedback_id: &FeedbackId) -> ContentResult<()>;
}
