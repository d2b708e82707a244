//! Content Entities

use chrono::{DateTime, Utc};
use kernel::id::Id;
use uuid::Uuid;

/// Marker for news ids
pub struct NewsMarker;
pub type NewsId = Id<NewsMarker>;

/// Marker for feedback ids
pub struct FeedbackMarker;
pub type FeedbackId = Id<FeedbackMarker>;

/// Bounds applied to incoming news fields
const MAX_TITLE_LEN: usize = 300;
const MAX_SUMMARY_LEN: usize = 1000;

/// News article
///
/// `author_id` is a weak reference: deleting the author keeps the article,
/// and listings render "Неизвестно" for the byline.
#[derive(Debug, Clone)]
pub struct News {
    pub news_id: NewsId,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Publication instant shown to readers, Unix epoch milliseconds
    pub published_at_ms: i64,
    pub author_id: Uuid,
    /// Opaque URL of the cover image
    pub main_image: Option<String>,
    /// Opaque URLs of gallery images
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or replacing an article
#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub main_image: Option<String>,
    pub images: Vec<String>,
}

impl NewsDraft {
    /// Structural validation with Russian user-facing messages
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Заголовок не может быть пустым".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err("Заголовок слишком длинный".to_string());
        }
        if self.summary.chars().count() > MAX_SUMMARY_LEN {
            return Err("Краткое описание слишком длинное".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Текст новости не может быть пустым".to_string());
        }
        Ok(())
    }
}

impl News {
    /// Create a new article from a validated draft
    pub fn from_draft(draft: NewsDraft, author_id: Uuid) -> Self {
        let now = Utc::now();

        Self {
            news_id: NewsId::new(),
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            published_at_ms: now.timestamp_millis(),
            author_id,
            main_image: draft.main_image,
            images: draft.images,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping identity, author and the
    /// original publication instant
    pub fn apply_draft(&mut self, draft: NewsDraft) {
        self.title = draft.title;
        self.summary = draft.summary;
        self.content = draft.content;
        self.main_image = draft.main_image;
        self.images = draft.images;
        self.updated_at = Utc::now();
    }
}

/// News article paired with its resolved author name for listings
#[derive(Debug, Clone)]
pub struct NewsListItem {
    pub news: News,
    /// Author full name, "Неизвестно" when the author row is gone
    pub author_name: String,
}

/// Visitor feedback message
#[derive(Debug, Clone)]
pub struct Feedback {
    pub feedback_id: FeedbackId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_answered: bool,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Create a new unanswered feedback entry.
    /// Name, email and message must be non-empty.
    pub fn new(name: String, email: String, message: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Имя не может быть пустым".to_string());
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err("Некорректный email".to_string());
        }
        if message.trim().is_empty() {
            return Err("Сообщение не может быть пустым".to_string());
        }

        Ok(Self {
            feedback_id: FeedbackId::new(),
            name,
            email,
            message,
            is_answered: false,
            created_at: Utc::now(),
        })
    }
}
