use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use gamify_core::model::{QuizError, QuizSession};
use services::api::{
    ApiError, ChallengeResponse, CodeSubmitResponse, GamifyApi, QuestCompleteResponse,
    QuestLineResponse, QuestionPayload, QuestionResultPayload, QuizGenerateResponse,
    QuizSubmitResponse, StatsResponse,
};
use services::{QuizService, QuizServiceError};

#[derive(Default)]
struct ScriptedApi {
    generate_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    quiz: Option<QuizGenerateResponse>,
    graded: Option<QuizSubmitResponse>,
    submit_fails: bool,
}

#[async_trait]
impl GamifyApi for ScriptedApi {
    async fn fetch_stats(&self) -> Result<StatsResponse, ApiError> {
        panic!("stats not scripted for quiz flow")
    }

    async fn generate_quiz(&self, _content: &str) -> Result<QuizGenerateResponse, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.quiz.clone().expect("quiz response scripted"))
    }

    async fn submit_quiz(
        &self,
        _quiz_id: gamify_core::model::QuizId,
        _answers: &[u32],
    ) -> Result<QuizSubmitResponse, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if self.submit_fails {
            return Err(ApiError::Status(reqwest::StatusCode::NOT_FOUND));
        }
        Ok(self.graded.clone().expect("graded response scripted"))
    }

    async fn generate_quests(
        &self,
        _goal: &str,
        _context: &str,
    ) -> Result<QuestLineResponse, ApiError> {
        panic!("quests not scripted for quiz flow")
    }

    async fn complete_quest(
        &self,
        _quest_line_id: gamify_core::model::QuestLineId,
        _quest_id: gamify_core::model::QuestId,
    ) -> Result<QuestCompleteResponse, ApiError> {
        panic!("quests not scripted for quiz flow")
    }

    async fn generate_challenge(
        &self,
        _difficulty: &str,
        _topic: &str,
    ) -> Result<ChallengeResponse, ApiError> {
        panic!("challenges not scripted for quiz flow")
    }

    async fn submit_code(
        &self,
        _challenge_id: gamify_core::model::ChallengeId,
        _code: &str,
    ) -> Result<CodeSubmitResponse, ApiError> {
        panic!("challenges not scripted for quiz flow")
    }
}

fn two_question_quiz() -> QuizGenerateResponse {
    QuizGenerateResponse {
        quiz_id: 1234,
        title: "Sample Quiz".into(),
        total_xp: 40,
        questions: vec![
            QuestionPayload {
                question: "First?".into(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            },
            QuestionPayload {
                question: "Second?".into(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            },
        ],
    }
}

async fn generate(service: &QuizService) -> QuizSession {
    service.generate("some study content").await.unwrap()
}

#[tokio::test]
async fn generate_sizes_the_answer_sheet_to_the_question_count() {
    let api = Arc::new(ScriptedApi {
        quiz: Some(two_question_quiz()),
        ..ScriptedApi::default()
    });
    let service = QuizService::new(api);

    let session = generate(&service).await;
    assert_eq!(session.questions().len(), 2);
    assert_eq!(session.answers().len(), 2);
    assert_eq!(session.answers().unanswered_count(), 2);
}

#[tokio::test]
async fn empty_content_is_rejected_before_any_network_call() {
    let api = Arc::new(ScriptedApi::default());
    let service = QuizService::new(Arc::clone(&api) as Arc<dyn GamifyApi>);

    let err = service.generate("   \n  ").await.unwrap_err();
    assert!(matches!(err, QuizServiceError::EmptyContent));
    assert_eq!(api.generate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn incomplete_answers_are_rejected_before_any_network_call() {
    let api = Arc::new(ScriptedApi {
        quiz: Some(two_question_quiz()),
        ..ScriptedApi::default()
    });
    let service = QuizService::new(Arc::clone(&api) as Arc<dyn GamifyApi>);

    let mut session = generate(&service).await;
    session.select_answer(0, 1).unwrap();

    let err = service.submit(&session).await.unwrap_err();
    assert!(matches!(
        err,
        QuizServiceError::Quiz(QuizError::Incomplete { unanswered: 1 })
    ));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn graded_report_exposes_the_correct_answer_labels() {
    let api = Arc::new(ScriptedApi {
        quiz: Some(QuizGenerateResponse {
            quiz_id: 9,
            title: "One Question".into(),
            total_xp: 30,
            questions: vec![QuestionPayload {
                question: "Pick one".into(),
                options: vec!["A".into(), "B".into()],
            }],
        }),
        graded: Some(QuizSubmitResponse {
            correct: 0,
            total: 1,
            percentage: 0.0,
            perfect: false,
            xp_earned: 0,
            bonus_xp: 0,
            leveled_up: false,
            level: 0,
            results: vec![QuestionResultPayload {
                question: "Pick one".into(),
                is_correct: false,
                your_answer: "A".into(),
                correct_answer: "B".into(),
                explanation: "B was right".into(),
            }],
        }),
        ..ScriptedApi::default()
    });
    let service = QuizService::new(api);

    let mut session = generate(&service).await;
    session.select_answer(0, 0).unwrap();

    let report = service.submit(&session).await.unwrap();
    assert_eq!(report.correct, 0);
    assert!(!report.perfect);
    assert_eq!(report.reviews[0].your_answer, "A");
    assert_eq!(report.reviews[0].correct_answer, "B");
    assert!(report.reward.is_empty());
}

#[tokio::test]
async fn submission_reward_carries_xp_and_level_up() {
    let api = Arc::new(ScriptedApi {
        quiz: Some(two_question_quiz()),
        graded: Some(QuizSubmitResponse {
            correct: 2,
            total: 2,
            percentage: 100.0,
            perfect: true,
            xp_earned: 50,
            bonus_xp: 30,
            leveled_up: true,
            level: 2,
            results: vec![],
        }),
        ..ScriptedApi::default()
    });
    let service = QuizService::new(api);

    let mut session = generate(&service).await;
    session.select_answer(0, 0).unwrap();
    session.select_answer(1, 3).unwrap();

    let report = service.submit(&session).await.unwrap();
    // Quiz xp_earned is already bonus-inclusive; the popup shows it as-is.
    assert_eq!(report.reward.xp_delta, 50);
    assert_eq!(report.reward.new_level, Some(2));
    assert_eq!(report.bonus_xp, 30);
}

#[tokio::test]
async fn stale_quiz_id_surfaces_as_a_failure_not_a_crash() {
    let api = Arc::new(ScriptedApi {
        quiz: Some(two_question_quiz()),
        submit_fails: true,
        ..ScriptedApi::default()
    });
    let service = QuizService::new(api);

    let mut session = generate(&service).await;
    session.select_answer(0, 0).unwrap();
    session.select_answer(1, 0).unwrap();

    let err = service.submit(&session).await.unwrap_err();
    assert!(matches!(err, QuizServiceError::Api(ApiError::Status(_))));
}
