//! News Use Cases
//!
//! Reads are public; every mutation passes the access gate with the editor
//! tier at the point of execution.

use std::sync::Arc;

use auth::{Identity, UserRole, authorize};

use crate::domain::entity::{News, NewsDraft, NewsId, NewsListItem};
use crate::domain::repository::NewsRepository;
use crate::error::{ContentError, ContentResult};

/// News use cases
pub struct NewsService<R>
where
    R: NewsRepository,
{
    repo: Arc<R>,
}

impl<R> NewsService<R>
where
    R: NewsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all articles, newest first, with author names resolved
    pub async fn list(&self) -> ContentResult<Vec<NewsListItem>> {
        self.repo.list().await
    }

    /// Fetch a single article
    pub async fn get_by_id(&self, news_id: &NewsId) -> ContentResult<News> {
        self.repo
            .find_by_id(news_id)
            .await?
            .ok_or(ContentError::NewsNotFound)
    }

    /// Publish a new article (editor+). The caller becomes the author.
    pub async fn create(&self, identity: &Identity, draft: NewsDraft) -> ContentResult<News> {
        authorize(UserRole::Editor, identity).map_err(ContentError::Auth)?;
        draft.validate().map_err(ContentError::Validation)?;

        // authorize() guarantees an authenticated caller here
        let author_id = identity
            .user_id()
            .ok_or_else(|| ContentError::Internal("Authenticated identity without id".into()))?;

        let news = News::from_draft(draft, author_id.into_uuid());
        self.repo.insert(&news).await?;

        tracing::info!(news_id = %news.news_id, author_id = %news.author_id, "News published");
        Ok(news)
    }

    /// Replace an article's editable fields (editor+)
    pub async fn update(
        &self,
        identity: &Identity,
        news_id: &NewsId,
        draft: NewsDraft,
    ) -> ContentResult<News> {
        authorize(UserRole::Editor, identity).map_err(ContentError::Auth)?;
        draft.validate().map_err(ContentError::Validation)?;

        let mut news = self
            .repo
            .find_by_id(news_id)
            .await?
            .ok_or(ContentError::NewsNotFound)?;

        news.apply_draft(draft);
        self.repo.update(&news).await?;

        tracing::info!(news_id = %news.news_id, "News updated");
        Ok(news)
    }

    /// Delete an article (editor+)
    pub async fn delete(&self, identity: &Identity, news_id: &NewsId) -> ContentResult<()> {
        authorize(UserRole::Editor, identity).map_err(ContentError::Auth)?;
        self.repo.delete(news_id).await?;

        tracing::info!(news_id = %news_id, "News deleted");
        Ok(())
    }
}
