//! Feedback Use Cases
//!
//! Submission is open to anonymous visitors; reading and answering are
//! admin operations.

use std::sync::Arc;

use auth::{Identity, UserRole, authorize};

use crate::domain::entity::{Feedback, FeedbackId};
use crate::domain::repository::FeedbackRepository;
use crate::error::{ContentError, ContentResult};

/// Feedback use cases
pub struct FeedbackService<R>
where
    R: FeedbackRepository,
{
    repo: Arc<R>,
}

impl<R> FeedbackService<R>
where
    R: FeedbackRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Accept a visitor message. Always starts unanswered.
    pub async fn submit(
        &self,
        name: String,
        email: String,
        message: String,
    ) -> ContentResult<Feedback> {
        let feedback =
            Feedback::new(name, email, message).map_err(ContentError::Validation)?;
        self.repo.insert(&feedback).await?;

        tracing::info!(feedback_id = %feedback.feedback_id, "Feedback submitted");
        Ok(feedback)
    }

    /// List all feedback, newest first (admin)
    pub async fn list(&self, identity: &Identity) -> ContentResult<Vec<Feedback>> {
        authorize(UserRole::Admin, identity).map_err(ContentError::Auth)?;
        self.repo.list().await
    }

    /// Flag a message as answered (admin)
    pub async fn mark_answered(
        &self,
        identity: &Identity,
        feedback_id: &FeedbackId,
    ) -> ContentResult<()> {
        authorize(UserRole::Admin, identity).map_err(ContentError::Auth)?;
        self.repo.mark_answered(feedback_id).await?;

        tracing::info!(feedback_id = %feedback_id, "Feedback marked answered");
        Ok(())
    }
}
