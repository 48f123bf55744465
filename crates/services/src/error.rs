//! Shared error types for the services crate.

use thiserror::Error;

use gamify_core::model::QuizError;

use crate::api::ApiError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    /// Rejected before any network call.
    #[error("quiz content is empty")]
    EmptyContent,
    /// Rejected before any network call (unanswered slots remain).
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuestService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestServiceError {
    /// Rejected before any network call.
    #[error("quest goal is empty")]
    EmptyGoal,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ChallengeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChallengeServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
