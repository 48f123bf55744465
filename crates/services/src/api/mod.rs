//! Backend contract: the calls the Gamify client makes and the payloads they
//! exchange. Everything here is request/response semantics only; session
//! state lives in `gamify-core` and the workflow services.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use gamify_core::model::{ChallengeId, QuestId, QuestLineId, QuizId};

pub mod http;

pub use http::HttpGamifyApi;

/// Transport-level failures. Backend logical negatives (quest not confirmed,
/// code failed) are regular response data, never this.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("backend request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// The backend as the session controller sees it.
///
/// Object-safe so services can share one `Arc<dyn GamifyApi>` and tests can
/// substitute a scripted mock.
#[async_trait]
pub trait GamifyApi: Send + Sync {
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError>;

    async fn generate_quiz(&self, content: &str) -> Result<QuizGenerateResponse, ApiError>;
    async fn submit_quiz(
        &self,
        quiz_id: QuizId,
        answers: &[u32],
    ) -> Result<QuizSubmitResponse, ApiError>;

    async fn generate_quests(
        &self,
        goal: &str,
        context: &str,
    ) -> Result<QuestLineResponse, ApiError>;
    async fn complete_quest(
        &self,
        quest_line_id: QuestLineId,
        quest_id: QuestId,
    ) -> Result<QuestCompleteResponse, ApiError>;

    async fn generate_challenge(
        &self,
        difficulty: &str,
        topic: &str,
    ) -> Result<ChallengeResponse, ApiError>;
    async fn submit_code(
        &self,
        challenge_id: ChallengeId,
        code: &str,
    ) -> Result<CodeSubmitResponse, ApiError>;
}

//
// ─── RESPONSE PAYLOADS ────────────────────────────────────────────────────────
//
// Field names mirror the backend's JSON. Unknown fields are ignored; fields
// the backend omits on negative paths default.

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub level: u32,
    pub xp: u64,
    #[serde(default)]
    pub xp_to_next: u64,
    #[serde(default)]
    pub xp_progress_percent: f64,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub achievements: Vec<UnlockedAchievement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnlockedAchievement {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizGenerateResponse {
    pub quiz_id: u64,
    pub title: String,
    pub total_xp: u32,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionPayload {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSubmitResponse {
    pub correct: u32,
    pub total: u32,
    pub percentage: f64,
    #[serde(default)]
    pub perfect: bool,
    pub xp_earned: u32,
    #[serde(default)]
    pub bonus_xp: u32,
    #[serde(default)]
    pub leveled_up: bool,
    #[serde(default)]
    pub level: u32,
    pub results: Vec<QuestionResultPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResultPayload {
    pub question: String,
    pub is_correct: bool,
    pub your_answer: String,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestLineResponse {
    pub quest_line_id: u64,
    pub goal: String,
    pub total_xp: u32,
    pub quests: Vec<QuestPayload>,
    #[serde(default)]
    pub boss_quest: Option<QuestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestPayload {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub xp_reward: u32,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestCompleteResponse {
    pub completed: bool,
    #[serde(default)]
    pub xp_earned: u32,
    #[serde(default)]
    pub leveled_up: bool,
    #[serde(default)]
    pub level: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeResponse {
    pub challenge_id: u64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub starter_code: String,
    #[serde(default)]
    pub hints: Vec<String>,
    pub xp_reward: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeSubmitResponse {
    pub passed: bool,
    pub feedback: String,
    #[serde(default)]
    pub xp_earned: u32,
    #[serde(default)]
    pub bonus_xp: u32,
    #[serde(default)]
    pub leveled_up: bool,
    #[serde(default)]
    pub level: u32,
}
