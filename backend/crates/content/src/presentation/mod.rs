//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ContentAppState;
pub use router::{feedback_router, news_router};
