use crate::model::ids::{QuestId, QuestLineId};

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Quest difficulty tiers as the backend hands them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestDifficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Epic,
}

impl QuestDifficulty {
    /// Parse the backend's difficulty label; unknown labels fall back to
    /// `Normal` at the call site via `unwrap_or_default`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Self::Easy),
            "Normal" => Some(Self::Normal),
            "Hard" => Some(Self::Hard),
            "Epic" => Some(Self::Epic),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Epic => "Epic",
        }
    }

    /// Lowercase token used as a style hook.
    #[must_use]
    pub fn css_token(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Epic => "epic",
        }
    }
}

//
// ─── QUEST & QUEST LINE ───────────────────────────────────────────────────────
//

/// One step of a quest line. `completed` is monotonic: the only mutation this
/// type offers flips it from false to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    id: QuestId,
    title: String,
    description: String,
    difficulty: QuestDifficulty,
    xp_reward: u32,
    completed: bool,
}

impl Quest {
    #[must_use]
    pub fn new(
        id: QuestId,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: QuestDifficulty,
        xp_reward: u32,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            difficulty,
            xp_reward,
            completed,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn difficulty(&self) -> QuestDifficulty {
        self.difficulty
    }

    #[must_use]
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip to completed. Returns false when the quest already was, so
    /// callers can tell a fresh completion from a no-op.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }
}

/// The single live quest line: ordered quests plus an optional boss quest
/// that shares completion mechanics but gets distinct presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLine {
    id: QuestLineId,
    goal: String,
    quests: Vec<Quest>,
    boss_quest: Option<Quest>,
    total_xp: u32,
}

impl QuestLine {
    #[must_use]
    pub fn new(
        id: QuestLineId,
        goal: impl Into<String>,
        quests: Vec<Quest>,
        boss_quest: Option<Quest>,
        total_xp: u32,
    ) -> Self {
        Self {
            id,
            goal: goal.into(),
            quests,
            boss_quest,
            total_xp,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestLineId {
        self.id
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    #[must_use]
    pub fn boss_quest(&self) -> Option<&Quest> {
        self.boss_quest.as_ref()
    }

    #[must_use]
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    #[must_use]
    pub fn quest(&self, id: QuestId) -> Option<&Quest> {
        self.quests
            .iter()
            .find(|quest| quest.id() == id)
            .or(self.boss_quest.as_ref().filter(|boss| boss.id() == id))
    }

    /// Mark a quest completed after the backend confirmed it.
    ///
    /// Returns false when the id is unknown or the quest was already
    /// completed; the line is untouched in both cases.
    pub fn mark_completed(&mut self, id: QuestId) -> bool {
        let quest = self
            .quests
            .iter_mut()
            .find(|quest| quest.id() == id)
            .or(self.boss_quest.as_mut().filter(|boss| boss.id() == id));
        match quest {
            Some(quest) => quest.complete(),
            None => false,
        }
    }

    /// Completion summary computed from the owned line; no backend call.
    #[must_use]
    pub fn progress(&self) -> QuestProgress {
        let total = self.quests.len();
        let completed = self
            .quests
            .iter()
            .filter(|quest| quest.is_completed())
            .count();
        let boss_completed = self
            .boss_quest
            .as_ref()
            .is_some_and(|boss| boss.is_completed());

        let mut xp_earned: u32 = self
            .quests
            .iter()
            .filter(|quest| quest.is_completed())
            .map(Quest::xp_reward)
            .sum();
        if boss_completed {
            xp_earned += self.boss_quest.as_ref().map_or(0, Quest::xp_reward);
        }

        let percentage = if total > 0 {
            (completed as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };
        let all_done = completed == total
            && self
                .boss_quest
                .as_ref()
                .is_none_or(|boss| boss.is_completed());

        QuestProgress {
            completed,
            total,
            percentage,
            boss_completed,
            xp_earned,
            xp_remaining: self.total_xp.saturating_sub(xp_earned),
            all_done,
        }
    }
}

/// Snapshot of how far along a quest line is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
    pub boss_completed: bool,
    pub xp_earned: u32,
    pub xp_remaining: u32,
    pub all_done: bool,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
