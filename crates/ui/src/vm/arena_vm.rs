use gamify_core::model::{
    ChallengeDifficulty, ChallengeSelection, ChallengeSession, ChallengeVerdict, RewardGrant,
};
use services::ChallengeServiceError;

/// Which section of the arena view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaPhase {
    Select,
    Editor,
}

/// State machine behind the code arena view.
///
/// The difficulty/topic selection is deliberately outside the session: it is
/// the user's default for the next generation and survives both resets and
/// regenerations. A failed verdict keeps the session live for resubmission.
#[derive(Debug)]
pub struct ArenaVm {
    selection: ChallengeSelection,
    session: Option<ChallengeSession>,
    verdict: Option<ChallengeVerdict>,
    phase: ArenaPhase,
    busy: bool,
    notice: Option<String>,
}

impl ArenaVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: ChallengeSelection::default(),
            session: None,
            verdict: None,
            phase: ArenaPhase::Select,
            busy: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ArenaPhase {
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
    pub fn selection(&self) -> &ChallengeSelection {
        &self.selection
    }

    #[must_use]
    pub fn session(&self) -> Option<&ChallengeSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<&ChallengeVerdict> {
        self.verdict.as_ref()
    }

    /// Pure local selection mutation; no backend interaction.
    pub fn select_difficulty(&mut self, difficulty: ChallengeDifficulty) {
        self.selection.select_difficulty(difficulty);
    }

    /// Pure local selection mutation; no backend interaction.
    pub fn select_topic(&mut self, topic: impl Into<String>) {
        self.selection.select_topic(topic);
    }

    pub fn begin_generate(&mut self) {
        self.busy = true;
        self.notice = None;
    }

    /// Install the generated challenge and move to the editor, or surface a
    /// retry prompt and stay on the selector.
    pub fn finish_generate(&mut self, result: Result<ChallengeSession, ChallengeServiceError>) {
        self.busy = false;
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.verdict = None;
                self.notice = None;
                self.phase = ArenaPhase::Editor;
            }
            Err(_) => {
                self.notice =
                    Some("Failed to generate challenge. Please try again.".to_string());
            }
        }
    }

    /// Gate submission on a live session.
    pub fn begin_submit(&mut self) -> Option<ChallengeSession> {
        let session = self.session.as_ref()?.clone();
        self.busy = true;
        self.notice = None;
        Some(session)
    }

    /// Record the verdict. A pass hands back its reward; a fail only shows
    /// feedback and leaves the session open for another attempt.
    pub fn finish_submit(
        &mut self,
        result: Result<ChallengeVerdict, ChallengeServiceError>,
    ) -> Option<RewardGrant> {
        self.busy = false;
        match result {
            Ok(verdict) => {
                let reward = verdict.passed.then_some(verdict.reward);
                self.verdict = Some(verdict);
                reward
            }
            Err(_) => {
                self.notice = Some("Failed to submit solution. Please try again.".to_string());
                None
            }
        }
    }

    /// Back to the selector; the selection itself is kept as the next
    /// default.
    pub fn reset(&mut self) {
        self.session = None;
        self.verdict = None;
        self.notice = None;
        self.busy = false;
        self.phase = ArenaPhase::Select;
    }
}

impl Default for ArenaVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamify_core::model::ChallengeId;

    fn session() -> ChallengeSession {
        ChallengeSession::new(
            ChallengeId::new(1001),
            "Sum Two Numbers",
            "Add them.",
            ChallengeDifficulty::Easy,
            "general",
            20,
            "def solution(a, b):\n    pass",
            vec!["Use +".into()],
        )
    }

    fn verdict(passed: bool, reward: RewardGrant) -> ChallengeVerdict {
        ChallengeVerdict {
            passed,
            feedback: "feedback".into(),
            xp_earned: 50,
            bonus_xp: 10,
            reward,
        }
    }

    #[test]
    fn selection_survives_reset_and_regeneration() {
        let mut vm = ArenaVm::new();
        vm.select_difficulty(ChallengeDifficulty::Hard);
        vm.select_topic("algorithms");

        vm.finish_generate(Ok(session()));
        vm.reset();

        assert_eq!(vm.selection().difficulty(), ChallengeDifficulty::Hard);
        assert_eq!(vm.selection().topic(), "algorithms");
        assert_eq!(vm.phase(), ArenaPhase::Select);
        assert!(vm.session().is_none());
    }

    #[test]
    fn passed_verdict_hands_back_the_summed_reward() {
        let mut vm = ArenaVm::new();
        vm.finish_generate(Ok(session()));

        assert!(vm.begin_submit().is_some());
        let reward = vm
            .finish_submit(Ok(verdict(true, RewardGrant::new(60, None))))
            .expect("passed");

        assert_eq!(reward.xp_delta, 60);
        assert!(vm.verdict().unwrap().passed);
        assert_eq!(vm.phase(), ArenaPhase::Editor);
    }

    #[test]
    fn failed_verdict_shows_feedback_without_reward_or_session_change() {
        let mut vm = ArenaVm::new();
        vm.finish_generate(Ok(session()));
        let before = vm.session().cloned();

        assert!(vm.begin_submit().is_some());
        let reward = vm.finish_submit(Ok(verdict(false, RewardGrant::none())));

        assert!(reward.is_none());
        assert!(!vm.verdict().unwrap().passed);
        assert_eq!(vm.session().cloned(), before);
    }

    #[test]
    fn submit_without_a_session_is_inert() {
        let mut vm = ArenaVm::new();
        assert!(vm.begin_submit().is_none());
        assert!(!vm.busy());
    }

    #[test]
    fn regeneration_clears_the_previous_verdict() {
        let mut vm = ArenaVm::new();
        vm.finish_generate(Ok(session()));
        vm.begin_submit();
        vm.finish_submit(Ok(verdict(false, RewardGrant::none())));

        vm.begin_generate();
        vm.finish_generate(Ok(session()));

        assert!(vm.verdict().is_none());
        assert_eq!(vm.phase(), ArenaPhase::Editor);
    }
}
