use gamify_core::model::{QuizReport, QuizSession, RewardGrant};
use services::QuizServiceError;

/// Which section of the quiz view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Input,
    Active,
    Results,
}

/// State machine behind the quiz view.
///
/// The async halves live in the view: an event handler calls
/// `begin_*`, awaits the service, then feeds the result to `finish_*`.
/// Every transition is a single synchronous install, so a failed call leaves
/// the previous state fully intact, and whichever in-flight call resolves
/// last wins (the documented behavior for rapid repeat clicks).
#[derive(Debug)]
pub struct QuizVm {
    session: Option<QuizSession>,
    report: Option<QuizReport>,
    phase: QuizPhase,
    busy: bool,
    notice: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: None,
            report: None,
            phase: QuizPhase::Input,
            busy: false,
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Whether the triggering control should be disabled.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn report(&self) -> Option<&QuizReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.session
            .as_ref()
            .and_then(|session| session.answers().selected(question))
    }

    /// Disable the generate control while the request is in flight.
    pub fn begin_generate(&mut self) {
        self.busy = true;
        self.notice = None;
    }

    /// Install the generated session, or surface a prompt. The control is
    /// re-enabled unconditionally so nothing gets stuck loading.
    pub fn finish_generate(&mut self, result: Result<QuizSession, QuizServiceError>) {
        self.busy = false;
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.report = None;
                self.notice = None;
                self.phase = QuizPhase::Active;
            }
            Err(QuizServiceError::EmptyContent) => {
                self.notice = Some("Please paste some text content first!".to_string());
            }
            Err(_) => {
                self.notice = Some("Failed to generate quiz. Please try again.".to_string());
            }
        }
    }

    /// Record a selection; re-selecting a question overwrites its slot.
    pub fn select_answer(&mut self, question: usize, option: usize) {
        if let Some(session) = &mut self.session {
            let _ = session.select_answer(question, option);
        }
    }

    /// Gate submission: returns the session to submit, or `None` (with a
    /// prompt) while any question is unanswered. No network call happens in that case.
    pub fn begin_submit(&mut self) -> Option<QuizSession> {
        let session = self.session.as_ref()?;
        if !session.is_complete() {
            self.notice = Some("Please answer all questions!".to_string());
            return None;
        }
        self.busy = true;
        self.notice = None;
        Some(session.clone())
    }

    /// Install the graded report and hand back the reward to celebrate, or
    /// surface a retry prompt and keep the quiz answerable.
    pub fn finish_submit(
        &mut self,
        result: Result<QuizReport, QuizServiceError>,
    ) -> Option<RewardGrant> {
        self.busy = false;
        match result {
            Ok(report) => {
                let reward = report.reward;
                self.report = Some(report);
                self.notice = None;
                self.phase = QuizPhase::Results;
                Some(reward)
            }
            Err(_) => {
                self.notice = Some("Failed to submit quiz. Please try again.".to_string());
                None
            }
        }
    }

    /// Back to the input view; discards the session, answers and report.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuizVm {
    fn default() -> Self {
        Self::new()
    }
}
