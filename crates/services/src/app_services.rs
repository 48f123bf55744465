use std::sync::Arc;

use crate::api::{GamifyApi, HttpGamifyApi};
use crate::challenge_service::ChallengeService;
use crate::quest_service::QuestService;
use crate::quiz_service::QuizService;
use crate::stats_service::StatsService;

/// The service bundle the composition root hands to the UI.
///
/// All four services share one backend handle; swapping in a mock api wires
/// the whole bundle for tests.
#[derive(Clone)]
pub struct AppServices {
    pub stats: Arc<StatsService>,
    pub quiz: Arc<QuizService>,
    pub quests: Arc<QuestService>,
    pub challenges: Arc<ChallengeService>,
}

impl AppServices {
    #[must_use]
    pub fn new(api: Arc<dyn GamifyApi>) -> Self {
        Self {
            stats: Arc::new(StatsService::new(Arc::clone(&api))),
            quiz: Arc::new(QuizService::new(Arc::clone(&api))),
            quests: Arc::new(QuestService::new(Arc::clone(&api))),
            challenges: Arc::new(ChallengeService::new(api)),
        }
    }

    /// Bundle backed by the real JSON-over-HTTP backend.
    #[must_use]
    pub fn over_http(base_url: &str) -> Self {
        Self::new(Arc::new(HttpGamifyApi::new(base_url)))
    }
}
