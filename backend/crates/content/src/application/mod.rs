//! Application Layer

pub mod feedback;
pub mod news;

pub use feedback::FeedbackService;
pub use news::NewsService;
