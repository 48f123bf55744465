use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use gamify_core::model::{ChallengeDifficulty, ChallengeSelection};
use services::api::{
    ApiError, ChallengeResponse, CodeSubmitResponse, GamifyApi, QuestCompleteResponse,
    QuestLineResponse, QuizGenerateResponse, QuizSubmitResponse, StatsResponse,
};
use services::ChallengeService;

#[derive(Default)]
struct ScriptedApi {
    requested: Mutex<Vec<(String, String)>>,
    challenge: Option<ChallengeResponse>,
    verdict: Option<CodeSubmitResponse>,
}

#[async_trait]
impl GamifyApi for ScriptedApi {
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        panic!("stats not scripted for challenge flow")
    }

    async fn generate_quiz(&self, _content: &str) -> Result<QuizGenerateResponse, ApiError> {
        panic!("quiz not scripted for challenge flow")
    }

    async fn submit_quiz(
        &self,
        _quiz_id: gamify_core::model::QuizId,
        _answers: &[u32],
    ) -> Result<QuizSubmitResponse, ApiError> {
        panic!("quiz not scripted for challenge flow")
    }

    async fn generate_quests(
        &self,
        _goal: &str,
        _context: &str,
    ) -> Result<QuestLineResponse, ApiError> {
        panic!("quests not scripted for challenge flow")
    }

    async fn complete_quest(
        &self,
        _quest_line_id: gamify_core::model::QuestLineId,
        _quest_id: gamify_core::model::QuestId,
    ) -> Result<QuestCompleteResponse, ApiError> {
        panic!("quests not scripted for challenge flow")
    }

    async fn generate_challenge(
        &self,
        difficulty: &str,
        topic: &str,
    ) -> Result<ChallengeResponse, ApiError> {
        self.requested
            .lock()
            .unwrap()
            .push((difficulty.to_string(), topic.to_string()));
        Ok(self.challenge.clone().expect("challenge scripted"))
    }

    async fn submit_code(
        &self,
        _challenge_id: gamify_core::model::ChallengeId,
        _code: &str,
    ) -> Result<CodeSubmitResponse, ApiError> {
        Ok(self.verdict.clone().expect("verdict scripted"))
    }
}

fn scripted_challenge() -> ChallengeResponse {
    ChallengeResponse {
        challenge_id: 1001,
        title: "Sum Two Numbers".into(),
        description: "Return the sum of both arguments.".into(),
        difficulty: "Medium".into(),
        starter_code: "def solution(a, b):\n    pass".into(),
        hints: vec!["Use the + operator".into(), "Return the result".into()],
        xp_reward: 40,
    }
}

#[tokio::test]
async fn generate_sends_the_sticky_selection() {
    let api = Arc::new(ScriptedApi {
        challenge: Some(scripted_challenge()),
        ..ScriptedApi::default()
    });
    let service = ChallengeService::new(Arc::clone(&api) as Arc<dyn GamifyApi>);

    let mut selection = ChallengeSelection::default();
    selection.select_difficulty(ChallengeDifficulty::Medium);
    selection.select_topic("math");

    let first = service.generate(&selection).await.unwrap();
    // The selection survives the first generation and drives the next one.
    let second = service.generate(&selection).await.unwrap();

    let requested = api.requested.lock().unwrap().clone();
    assert_eq!(
        requested,
        vec![
            ("Medium".to_string(), "math".to_string()),
            ("Medium".to_string(), "math".to_string())
        ]
    );
    assert_eq!(first.topic(), "math");
    assert_eq!(second.difficulty(), ChallengeDifficulty::Medium);
    assert_eq!(first.hints().len(), 2);
}

#[tokio::test]
async fn passed_verdict_rewards_base_plus_bonus() {
    let api = Arc::new(ScriptedApi {
        challenge: Some(scripted_challenge()),
        verdict: Some(CodeSubmitResponse {
            passed: true,
            feedback: "Clean and correct.".into(),
            xp_earned: 50,
            bonus_xp: 10,
            leveled_up: false,
            level: 0,
        }),
        ..ScriptedApi::default()
    });
    let service = ChallengeService::new(api);

    let session = service
        .generate(&ChallengeSelection::default())
        .await
        .unwrap();
    let verdict = service
        .submit(&session, "def solution(a, b):\n    return a + b")
        .await
        .unwrap();

    assert!(verdict.passed);
    assert_eq!(verdict.reward.xp_delta, 60);
    assert_eq!(verdict.reward.new_level, None);
}

#[tokio::test]
async fn failed_verdict_carries_feedback_and_no_reward() {
    let api = Arc::new(ScriptedApi {
        challenge: Some(scripted_challenge()),
        verdict: Some(CodeSubmitResponse {
            passed: false,
            feedback: "Handles no edge cases.".into(),
            xp_earned: 0,
            bonus_xp: 0,
            leveled_up: false,
            level: 0,
        }),
        ..ScriptedApi::default()
    });
    let service = ChallengeService::new(api);

    let session = service
        .generate(&ChallengeSelection::default())
        .await
        .unwrap();
    let before = session.clone();

    let verdict = service.submit(&session, "def solution(a, b):\n    pass").await.unwrap();
    assert!(!verdict.passed);
    assert_eq!(verdict.feedback, "Handles no edge cases.");
    assert!(verdict.reward.is_empty());
    // The session itself is untouched; resubmission stays possible.
    assert_eq!(session, before);
}
