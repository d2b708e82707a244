//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::{Feedback, News, NewsListItem};
pub use repository::{FeedbackRepository, NewsRepository};
