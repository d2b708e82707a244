//! Scenario tests running the content services against an in-memory store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use auth::{AuthError, Identity, UserRole};

use crate::application::{FeedbackService, NewsService};
use crate::domain::entity::{Feedback, FeedbackId, News, NewsDraft, NewsId, NewsListItem};
use crate::domain::repository::{FeedbackRepository, NewsRepository};
use crate::error::{ContentError, ContentResult};

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Clone, Default)]
struct MemoryStore {
    news: Arc<RwLock<HashMap<Uuid, News>>>,
    /// Author names the store can resolve for listings
    authors: Arc<RwLock<HashMap<Uuid, String>>>,
    feedback: Arc<RwLock<HashMap<Uuid, Feedback>>>,
}

impl NewsRepository for MemoryStore {
    async fn insert(&self, news: &News) -> ContentResult<()> {
        self.news
            .write()
            .await
            .insert(news.news_id.into_uuid(), news.clone());
        Ok(())
    }

    async fn find_by_id(&self, news_id: &NewsId) -> ContentResult<Option<News>> {
        Ok(self.news.read().await.get(news_id.as_uuid()).cloned())
    }

    async fn list(&self) -> ContentResult<Vec<NewsListItem>> {
        let authors = self.authors.read().await;
        let mut items: Vec<NewsListItem> = self
            .news
            .read()
            .await
            .values()
            .map(|news| NewsListItem {
                news: news.clone(),
                author_name: authors
                    .get(&news.author_id)
                    .cloned()
                    .unwrap_or_else(|| "Неизвестно".to_string()),
            })
            .collect();
        items.sort_by(|a, b| b.news.published_at_ms.cmp(&a.news.published_at_ms));
        Ok(items)
    }

    async fn update(&self, news: &News) -> ContentResult<()> {
        let mut store = self.news.write().await;
        let slot = store
            .get_mut(news.news_id.as_uuid())
            .ok_or(ContentError::NewsNotFound)?;
        *slot = news.clone();
        Ok(())
    }

    async fn delete(&self, news_id: &NewsId) -> ContentResult<()> {
        self.news
            .write()
            .await
            .remove(news_id.as_uuid())
            .map(|_| ())
            .ok_or(ContentError::NewsNotFound)
    }
}

impl FeedbackRepository for MemoryStore {
    async fn insert(&self, feedback: &Feedback) -> ContentResult<()> {
        self.feedback
            .write()
            .await
            .insert(feedback.feedback_id.into_uuid(), feedback.clone());
        Ok(())
    }

    async fn list(&self) -> ContentResult<Vec<Feedback>> {
        let mut entries: Vec<Feedback> =
            self.feedback.read().await.values().cloned().collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn mark_answered(&self, feedback_id: &FeedbackId) -> ContentResult<()> {
        let mut store = self.feedback.write().await;
        let entry = store
            .get_mut(feedback_id.as_uuid())
            .ok_or(ContentError::FeedbackNotFound)?;
        entry.is_answered = true;
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn editor() -> Identity {
    Identity::Authenticated {
        user_id: auth::UserId::new(),
        role: UserRole::Editor,
    }
}

fn participant() -> Identity {
    Identity::Authenticated {
        user_id: auth::UserId::new(),
        role: UserRole::Participant,
    }
}

fn admin() -> Identity {
    Identity::Authenticated {
        user_id: auth::UserId::new(),
        role: UserRole::Admin,
    }
}

fn draft(title: &str) -> NewsDraft {
    NewsDraft {
        title: title.to_string(),
        summary: "Краткое описание".to_string(),
        content: "Полный текст".to_string(),
        main_image: None,
        images: vec![],
    }
}

fn assert_access_denied(err: ContentError) {
    assert!(matches!(err, ContentError::Auth(AuthError::AccessDenied)));
}

// ============================================================================
// News
// ============================================================================

#[tokio::test]
async fn test_news_mutations_require_editor() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let err = service
        .create(&Identity::Anonymous, draft("Новость"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Auth(AuthError::Unauthenticated)));

    assert_access_denied(
        service
            .create(&participant(), draft("Новость"))
            .await
            .unwrap_err(),
    );

    // But an editor and an admin both pass
    assert!(service.create(&editor(), draft("От редактора")).await.is_ok());
    assert!(service.create(&admin(), draft("От администратора")).await.is_ok());
}

#[tokio::test]
async fn test_news_reads_are_public() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let news = service.create(&editor(), draft("Открытая новость")).await.unwrap();

    // No identity needed for reads
    let fetched = service.get_by_id(&news.news_id).await.unwrap();
    assert_eq!(fetched.title, "Открытая новость");

    let listed = service.list().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_news_listing_is_newest_first_with_bylines() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let author = editor();
    let first = service.create(&author, draft("Первая")).await.unwrap();

    // Force distinct publication instants
    let mut second = News::from_draft(draft("Вторая"), author.user_id().unwrap().into_uuid());
    second.published_at_ms = first.published_at_ms + 1;
    NewsRepository::insert(repo.as_ref(), &second).await.unwrap();

    repo.authors
        .write()
        .await
        .insert(first.author_id, "Иван Иванов".to_string());

    let listed = service.list().await.unwrap();
    assert_eq!(listed[0].news.title, "Вторая");
    assert_eq!(listed[1].news.title, "Первая");
    assert_eq!(listed[0].author_name, "Иван Иванов");
}

#[tokio::test]
async fn test_deleted_author_renders_unknown_byline() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    service.create(&editor(), draft("Осиротевшая")).await.unwrap();

    // No author registered in the store at all
    let listed = service.list().await.unwrap();
    assert_eq!(listed[0].author_name, "Неизвестно");
}

#[tokio::test]
async fn test_news_update_and_delete() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let news = service.create(&editor(), draft("Черновик")).await.unwrap();

    let updated = service
        .update(&editor(), &news.news_id, draft("Чистовик"))
        .await
        .unwrap();
    assert_eq!(updated.title, "Чистовик");
    assert_eq!(updated.news_id, news.news_id);

    service.delete(&editor(), &news.news_id).await.unwrap();
    assert!(matches!(
        service.get_by_id(&news.news_id).await.unwrap_err(),
        ContentError::NewsNotFound
    ));
}

#[tokio::test]
async fn test_update_missing_news_is_not_found() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let err = service
        .update(&editor(), &NewsId::new(), draft("Ничто"))
        .await
        .unwrap_err();

    assert!(matches!(err, ContentError::NewsNotFound));
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_before_authorship() {
    let repo = Arc::new(MemoryStore::default());
    let service = NewsService::new(repo.clone());

    let mut bad = draft("");
    bad.title = "  ".to_string();

    let err = service.create(&editor(), bad).await.unwrap_err();
    assert!(matches!(err, ContentError::Validation(_)));
    assert!(service.list().await.unwrap().is_empty());
}

// ============================================================================
// Feedback
// ============================================================================

#[tokio::test]
async fn test_feedback_submission_is_open_and_starts_unanswered() {
    let repo = Arc::new(MemoryStore::default());
    let service = FeedbackService::new(repo.clone());

    let feedback = service
        .submit(
            "Мария".to_string(),
            "maria@example.com".to_string(),
            "Когда следующее собрание?".to_string(),
        )
        .await
        .unwrap();

    assert!(!feedback.is_answered);
}

#[tokio::test]
async fn test_feedback_administration_is_admin_only() {
    let repo = Arc::new(MemoryStore::default());
    let service = FeedbackService::new(repo.clone());

    let feedback = service
        .submit("Мария".into(), "maria@example.com".into(), "Вопрос".into())
        .await
        .unwrap();

    assert_access_denied(service.list(&editor()).await.unwrap_err());
    assert_access_denied(
        service
            .mark_answered(&editor(), &feedback.feedback_id)
            .await
            .unwrap_err(),
    );

    service
        .mark_answered(&admin(), &feedback.feedback_id)
        .await
        .unwrap();

    let listed = service.list(&admin()).await.unwrap();
    assert!(listed[0].is_answered);
}

#[tokio::test]
async fn test_mark_answered_missing_feedback_is_not_found() {
    let repo = Arc::new(MemoryStore::default());
    let service = FeedbackService::new(repo.clone());

    let err = service
        .mark_answered(&admin(), &FeedbackId::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ContentError::FeedbackNotFound));
}
