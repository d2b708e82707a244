//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Feedback, FeedbackId, News, NewsId, NewsListItem};
use crate::domain::repository::{FeedbackRepository, NewsRepository};
use crate::error::{ContentError, ContentResult};

/// Byline shown when the author row no longer exists
const UNKNOWN_AUTHOR: &str = "Неизвестно";

/// PostgreSQL-backed content store
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// News Repository Implementation
// ============================================================================

impl NewsRepository for PgContentStore {
    async fn insert(&self, news: &News) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO news (
                news_id,
                title,
                summary,
                content,
                published_at_ms,
                author_id,
                main_image,
                images,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(news.news_id.as_uuid())
        .bind(&news.title)
        .bind(&news.summary)
        .bind(&news.content)
        .bind(news.published_at_ms)
        .bind(news.author_id)
        .bind(&news.main_image)
        .bind(&news.images)
        .bind(news.created_at)
        .bind(news.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, news_id: &NewsId) -> ContentResult<Option<News>> {
        let row = sqlx::query_as::<_, NewsRow>(
            r#"
            SELECT
                news_id,
                title,
                summary,
                content,
                published_at_ms,
                author_id,
                main_image,
                images,
                created_at,
                updated_at
            FROM news
            WHERE news_id = $1
            "#,
        )
        .bind(news_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NewsRow::into_news))
    }

    async fn list(&self) -> ContentResult<Vec<NewsListItem>> {
        // Weak author reference: the join may miss, the byline falls back
        let rows = sqlx::query_as::<_, NewsListRow>(
            r#"
            SELECT
                n.news_id,
                n.title,
                n.summary,
                n.content,
                n.published_at_ms,
                n.author_id,
                n.main_image,
                n.images,
                n.created_at,
                n.updated_at,
                COALESCE(u.full_name, $1) AS author_name
            FROM news n
            LEFT JOIN users u ON u.user_id = n.author_id
            ORDER BY n.published_at_ms DESC
            "#,
        )
        .bind(UNKNOWN_AUTHOR)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NewsListRow::into_item).collect())
    }

    async fn update(&self, news: &News) -> ContentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE news SET
                title = $2,
                summary = $3,
                content = $4,
                main_image = $5,
                images = $6,
                updated_at = $7
            WHERE news_id = $1
            "#,
        )
        .bind(news.news_id.as_uuid())
        .bind(&news.title)
        .bind(&news.summary)
        .bind(&news.content)
        .bind(&news.main_image)
        .bind(&news.images)
        .bind(news.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::NewsNotFound);
        }

        Ok(())
    }

    async fn delete(&self, news_id: &NewsId) -> ContentResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE news_id = $1")
            .bind(news_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::NewsNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

impl FeedbackRepository for PgContentStore {
    async fn insert(&self, feedback: &Feedback) -> ContentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                feedback_id,
                name,
                email,
                message,
                is_answered,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(feedback.feedback_id.as_uuid())
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.message)
        .bind(feedback.is_answered)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> ContentResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT
                feedback_id,
                name,
                email,
                message,
                is_answered,
                created_at
            FROM feedback
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedbackRow::into_feedback).collect())
    }

    async fn mark_answered(&self, feedback_id: &FeedbackId) -> ContentResult<()> {
        let result = sqlx::query("UPDATE feedback SET is_answered = TRUE WHERE feedback_id = $1")
            .bind(feedback_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ContentError::FeedbackNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct NewsRow {
    news_id: Uuid,
    title: String,
    summary: String,
    content: String,
    published_at_ms: i64,
    author_id: Uuid,
    main_image: Option<String>,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewsRow {
    fn into_news(self) -> News {
        News {
            news_id: NewsId::from_uuid(self.news_id),
            title: self.title,
            summary: self.summary,
            content: self.content,
            published_at_ms: self.published_at_ms,
            author_id: self.author_id,
            main_image: self.main_image,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NewsListRow {
    news_id: Uuid,
    title: String,
    summary: String,
    content: String,
    published_at_ms: i64,
    author_id: Uuid,
    main_image: Option<String>,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
}

impl NewsListRow {
    fn into_item(self) -> NewsListItem {
        NewsListItem {
            news: News {
                news_id: NewsId::from_uuid(self.news_id),
                title: self.title,
                summary: self.summary,
                content: self.content,
                published_at_ms: self.published_at_ms,
                author_id: self.author_id,
                main_image: self.main_image,
                images: self.images,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    feedback_id: Uuid,
    name: String,
    email: String,
    message: String,
    is_answered: bool,
    created_at: DateTime<Utc>,
}

impl FeedbackRow {
    fn into_feedback(self) -> Feedback {
        Feedback {
            feedback_id: FeedbackId::from_uuid(self.feedback_id),
            name: self.name,
            email: self.email,
            message: self.message,
            is_answered: self.is_answered,
            created_at: self.created_at,
        }
    }
}
