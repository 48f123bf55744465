use std::sync::Arc;

use gamify_core::model::AchievementCatalog;
use services::{AppServices, ChallengeService, QuestService, QuizService, StatsService};

/// What the composition root must provide to launch the UI.
pub trait UiApp: Send + Sync {
    fn app_services(&self) -> AppServices;
    fn achievement_catalog(&self) -> Arc<AchievementCatalog>;
}

/// Per-launch context shared with every view.
#[derive(Clone)]
pub struct AppContext {
    stats: Arc<StatsService>,
    quiz: Arc<QuizService>,
    quests: Arc<QuestService>,
    challenges: Arc<ChallengeService>,
    achievement_catalog: Arc<AchievementCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let services = app.app_services();
        Self {
            stats: services.stats,
            quiz: services.quiz,
            quests: services.quests,
            challenges: services.challenges,
            achievement_catalog: app.achievement_catalog(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn quests(&self) -> Arc<QuestService> {
        Arc::clone(&self.quests)
    }

    #[must_use]
    pub fn challenges(&self) -> Arc<ChallengeService> {
        Arc::clone(&self.challenges)
    }

    #[must_use]
    pub fn achievement_catalog(&self) -> Arc<AchievementCatalog> {
        Arc::clone(&self.achievement_catalog)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
