use std::sync::Arc;

use tracing::warn;

use gamify_core::model::{
    QuestionReview, QuizId, QuizQuestion, QuizReport, QuizSession, RewardGrant,
};

use crate::api::GamifyApi;
use crate::error::QuizServiceError;

/// Quiz workflow: generate a session from raw content, gate submission on a
/// complete answer sheet, map the graded report.
///
/// The service itself is stateless; the view-model owns the single live
/// `QuizSession` and replaces it wholesale when a new one is generated.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn GamifyApi>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn GamifyApi>) -> Self {
        Self { api }
    }

    /// Generate a fresh quiz session from study content.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::EmptyContent` (before any network call)
    /// when the content is empty after trimming, or `Api` on transport
    /// failures, in which case the caller keeps its previous state.
    pub async fn generate(&self, content: &str) -> Result<QuizSession, QuizServiceError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(QuizServiceError::EmptyContent);
        }

        let response = self.api.generate_quiz(content).await.inspect_err(|err| {
            warn!("quiz: generation failed: {err}");
        })?;

        let questions = response
            .questions
            .into_iter()
            .map(|payload| QuizQuestion::new(payload.question, payload.options))
            .collect();
        Ok(QuizSession::new(
            QuizId::new(response.quiz_id),
            response.title,
            questions,
            response.total_xp,
        ))
    }

    /// Submit the session's answers and return the graded report.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` (before any network call) while any
    /// slot is unanswered, or `Api` on transport failures, including the
    /// backend rejecting a stale quiz id.
    pub async fn submit(&self, session: &QuizSession) -> Result<QuizReport, QuizServiceError> {
        let answers = session.submission_answers()?;

        let response = self
            .api
            .submit_quiz(session.id(), &answers)
            .await
            .inspect_err(|err| {
                warn!("quiz: submission failed for quiz {}: {err}", session.id());
            })?;

        let reward = RewardGrant::new(
            i64::from(response.xp_earned),
            response.leveled_up.then_some(response.level),
        );
        let reviews = response
            .results
            .into_iter()
            .map(|payload| QuestionReview {
                question: payload.question,
                is_correct: payload.is_correct,
                your_answer: payload.your_answer,
                correct_answer: payload.correct_answer,
                explanation: payload.explanation,
            })
            .collect();

        Ok(QuizReport {
            correct: response.correct,
            total: response.total,
            percentage: response.percentage,
            perfect: response.perfect,
            xp_earned: response.xp_earned,
            bonus_xp: response.bonus_xp,
            reward,
            reviews,
        })
    }
}
