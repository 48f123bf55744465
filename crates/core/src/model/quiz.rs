use thiserror::Error;

use crate::model::ids::QuizId;
use crate::model::reward::RewardGrant;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors for answer-sheet mutations and submission gating.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("question index {0} is out of range")]
    QuestionOutOfRange(usize),
    #[error("option {option} is not valid for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
    #[error("{unanswered} question(s) still unanswered")]
    Incomplete { unanswered: usize },
}

//
// ─── QUESTION & SESSION ───────────────────────────────────────────────────────
//

/// A multiple-choice question as the backend exposes it before grading.
///
/// The correct option index and the explanation stay server-side until the
/// quiz is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// The single live quiz instance, answers included.
///
/// Embedding the answer sheet keeps the parallel-length invariant structural:
/// the sheet is sized from the question list at construction and never
/// resized afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    id: QuizId,
    title: String,
    questions: Vec<QuizQuestion>,
    total_xp: u32,
    answers: AnswerSheet,
}

impl QuizSession {
    #[must_use]
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        questions: Vec<QuizQuestion>,
        total_xp: u32,
    ) -> Self {
        let answers = AnswerSheet::sized(questions.len());
        Self {
            id,
            title: title.into(),
            questions,
            total_xp,
            answers,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Record the selected option for one question.
    ///
    /// Re-selecting overwrites the previous choice (single-select).
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when either index is out of range.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let options = self
            .questions
            .get(question)
            .ok_or(QuizError::QuestionOutOfRange(question))?
            .options
            .len();
        if option >= options {
            return Err(QuizError::OptionOutOfRange { question, option });
        }
        self.answers.select(question, option)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Answer indices ready for submission.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while any slot is unanswered, so the
    /// caller can refuse to touch the network.
    pub fn submission_answers(&self) -> Result<Vec<u32>, QuizError> {
        self.answers.as_indices()
    }
}

//
// ─── ANSWER SHEET ─────────────────────────────────────────────────────────────
//

/// One slot per question; `None` means unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<usize>>,
}

impl AnswerSheet {
    #[must_use]
    pub fn sized(questions: usize) -> Self {
        Self {
            slots: vec![None; questions],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.slots.get(question).copied().flatten()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unanswered_count() == 0
    }

    /// Overwrite the slot for `question` with `option`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::QuestionOutOfRange` for an unknown slot.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let slot = self
            .slots
            .get_mut(question)
            .ok_or(QuizError::QuestionOutOfRange(question))?;
        *slot = Some(option);
        Ok(())
    }

    /// All slots as plain indices, available only once the sheet is full.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` while any slot is unanswered.
    pub fn as_indices(&self) -> Result<Vec<u32>, QuizError> {
        let unanswered = self.unanswered_count();
        if unanswered > 0 {
            return Err(QuizError::Incomplete { unanswered });
        }
        Ok(self
            .slots
            .iter()
            .map(|slot| slot.expect("checked complete") as u32)
            .collect())
    }
}

//
// ─── GRADED REPORT ────────────────────────────────────────────────────────────
//

/// Per-question grading detail, revealed only after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question: String,
    pub is_correct: bool,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// Aggregate grading result for a submitted quiz.
///
/// `xp_earned` is already bonus-inclusive for quizzes; `bonus_xp` is broken
/// out for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizReport {
    pub correct: u32,
    pub total: u32,
    pub percentage: f64,
    pub perfect: bool,
    pub xp_earned: u32,
    pub bonus_xp: u32,
    pub reward: RewardGrant,
    pub reviews: Vec<QuestionReview>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
