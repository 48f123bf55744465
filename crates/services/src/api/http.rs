use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use gamify_core::model::{ChallengeId, QuestId, QuestLineId, QuizId};

use super::{
    ApiError, ChallengeResponse, CodeSubmitResponse, GamifyApi, QuestCompleteResponse,
    QuestLineResponse, QuizGenerateResponse, QuizSubmitResponse, StatsResponse,
};

#[derive(Debug, Serialize)]
struct QuizSubmission<'a> {
    answers: &'a [u32],
}

#[derive(Debug, Serialize)]
struct GoalRequest<'a> {
    goal: &'a str,
    context: &'a str,
}

#[derive(Debug, Serialize)]
struct QuestCompleteRequest {
    quest_id: u64,
}

#[derive(Debug, Serialize)]
struct ChallengeRequest<'a> {
    difficulty: &'a str,
    topic: &'a str,
}

#[derive(Debug, Serialize)]
struct CodeSubmission<'a> {
    code: &'a str,
}

/// JSON-over-HTTP implementation of the backend contract.
///
/// Quiz generation is the one form-encoded call (the backend reads `content`
/// as a form field); everything else is JSON bodies.
#[derive(Clone)]
pub struct HttpGamifyApi {
    client: Client,
    base_url: String,
}

impl HttpGamifyApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

#[async_trait]
impl GamifyApi for HttpGamifyApi {
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        let response = self.client.get(self.url("/api/stats")).send().await?;
        decode(response).await
    }

    async fn generate_quiz(&self, content: &str) -> Result<QuizGenerateResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/quiz/generate"))
            .form(&[("content", content)])
            .send()
            .await?;
        decode(response).await
    }

    async fn submit_quiz(
        &self,
        quiz_id: QuizId,
        answers: &[u32],
    ) -> Result<QuizSubmitResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/quiz/{quiz_id}/submit")))
            .json(&QuizSubmission { answers })
            .send()
            .await?;
        decode(response).await
    }

    async fn generate_quests(
        &self,
        goal: &str,
        context: &str,
    ) -> Result<QuestLineResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/quests/generate"))
            .json(&GoalRequest { goal, context })
            .send()
            .await?;
        decode(response).await
    }

    async fn complete_quest(
        &self,
        quest_line_id: QuestLineId,
        quest_id: QuestId,
    ) -> Result<QuestCompleteResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/quests/{quest_line_id}/complete")))
            .json(&QuestCompleteRequest {
                quest_id: quest_id.value(),
            })
            .send()
            .await?;
        decode(response).await
    }

    async fn generate_challenge(
        &self,
        difficulty: &str,
        topic: &str,
    ) -> Result<ChallengeResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/challenges/generate"))
            .json(&ChallengeRequest { difficulty, topic })
            .send()
            .await?;
        decode(response).await
    }

    async fn submit_code(
        &self,
        challenge_id: ChallengeId,
        code: &str,
    ) -> Result<CodeSubmitResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/challenges/{challenge_id}/submit")))
            .json(&CodeSubmission { code })
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let api = HttpGamifyApi::new("http://localhost:8000/");
        assert_eq!(api.url("/api/stats"), "http://localhost:8000/api/stats");
    }
}
