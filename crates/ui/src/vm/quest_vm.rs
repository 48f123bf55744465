use gamify_core::model::{QuestId, QuestLine, QuestLineId, QuestProgress, RewardGrant};
use services::QuestServiceError;

/// Which section of the quest view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestPhase {
    Input,
    Active,
}

/// State machine behind the quest view.
///
/// Owns the single live quest line. Completion is applied only after the
/// service relays a backend confirmation; a declined or failed completion
/// mutates nothing (silent no-op by design).
#[derive(Debug)]
pub struct QuestVm {
    line: Option<QuestLine>,
    phase: QuestPhase,
    busy: bool,
    notice: Option<String>,
}

impl QuestVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line: None,
            phase: QuestPhase::Input,
            busy: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuestPhase {
        self.phase
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn line(&self) -> Option<&QuestLine> {
        self.line.as_ref()
    }

    #[must_use]
    pub fn line_id(&self) -> Option<QuestLineId> {
        self.line.as_ref().map(QuestLine::id)
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuestProgress> {
        self.line.as_ref().map(QuestLine::progress)
    }

    pub fn begin_generate(&mut self) {
        self.busy = true;
        self.notice = None;
    }

    /// Install the generated quest line, or surface a prompt.
    pub fn finish_generate(&mut self, result: Result<QuestLine, QuestServiceError>) {
        self.busy = false;
        match result {
            Ok(line) => {
                self.line = Some(line);
                self.notice = None;
                self.phase = QuestPhase::Active;
            }
            Err(QuestServiceError::EmptyGoal) => {
                self.notice = Some("Please enter a goal!".to_string());
            }
            Err(_) => {
                self.notice = Some("Failed to create quest line. Please try again.".to_string());
            }
        }
    }

    /// Apply a completion outcome from the service.
    ///
    /// Confirmed: flip the quest's flag (monotonic) and hand back the reward.
    /// Declined or failed: return `None` and change nothing.
    pub fn apply_completion(
        &mut self,
        quest_id: QuestId,
        outcome: Result<Option<RewardGrant>, QuestServiceError>,
    ) -> Option<RewardGrant> {
        let reward = outcome.ok().flatten()?;
        if let Some(line) = &mut self.line {
            line.mark_completed(quest_id);
        }
        Some(reward)
    }

    /// Back to the goal input; discards the quest line.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuestVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamify_core::model::{Quest, QuestDifficulty};
    use services::api::ApiError;

    fn line() -> QuestLine {
        QuestLine::new(
            QuestLineId::new(3),
            "Learn something",
            vec![
                Quest::new(QuestId::new(1), "One", "d", QuestDifficulty::Easy, 15, false),
                Quest::new(QuestId::new(2), "Two", "d", QuestDifficulty::Normal, 25, false),
            ],
            None,
            40,
        )
    }

    #[test]
    fn confirmed_completion_flips_the_quest_and_returns_the_reward() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Ok(line()));

        let reward = vm
            .apply_completion(QuestId::new(1), Ok(Some(RewardGrant::new(15, None))))
            .expect("confirmed");

        assert_eq!(reward.xp_delta, 15);
        assert!(vm.line().unwrap().quests()[0].is_completed());
        assert_eq!(vm.progress().unwrap().completed, 1);
    }

    #[test]
    fn declined_completion_is_a_silent_no_op() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Ok(line()));
        let before = vm.line().cloned();

        let reward = vm.apply_completion(QuestId::new(2), Ok(None));

        assert!(reward.is_none());
        assert_eq!(vm.line().cloned(), before);
        assert!(vm.notice().is_none());
    }

    #[test]
    fn failed_completion_call_is_also_a_silent_no_op() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Ok(line()));
        let before = vm.line().cloned();

        let reward = vm.apply_completion(
            QuestId::new(1),
            Err(QuestServiceError::Api(ApiError::Status(
                reqwest::StatusCode::NOT_FOUND,
            ))),
        );

        assert!(reward.is_none());
        assert_eq!(vm.line().cloned(), before);
    }

    #[test]
    fn completion_stays_monotonic_across_repeat_confirmations() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Ok(line()));

        vm.apply_completion(QuestId::new(1), Ok(Some(RewardGrant::new(15, None))));
        vm.apply_completion(QuestId::new(1), Ok(Some(RewardGrant::new(15, None))));

        assert!(vm.line().unwrap().quests()[0].is_completed());
        assert_eq!(vm.progress().unwrap().completed, 1);
    }

    #[test]
    fn empty_goal_prompt_shows_without_a_line() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Err(QuestServiceError::EmptyGoal));

        assert_eq!(vm.phase(), QuestPhase::Input);
        assert_eq!(vm.notice(), Some("Please enter a goal!"));
        assert!(vm.line().is_none());
    }

    #[test]
    fn reset_discards_the_line() {
        let mut vm = QuestVm::new();
        vm.finish_generate(Ok(line()));
        vm.reset();

        assert_eq!(vm.phase(), QuestPhase::Input);
        assert!(vm.line().is_none());
    }
}
