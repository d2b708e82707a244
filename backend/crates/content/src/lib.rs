//! Content Backend Module
//!
//! News articles and visitor feedback for the public site. Reads are open;
//! news mutations require the editor role and feedback administration
//! requires admin, both checked through the auth access gate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::entity::{Feedback, News, NewsListItem};
pub use domain::repository::{FeedbackRepository, NewsRepository};
pub use error::{ContentError, ContentResult};
pub use infra::postgres::PgContentStore;
pub use presentation::router::{feedback_router, news_router};

#[cfg(test)]
mod tests;
