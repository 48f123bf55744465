use crate::model::ids::ChallengeId;
use crate::model::reward::RewardGrant;

//
// ─── DIFFICULTY & TOPICS ──────────────────────────────────────────────────────
//

/// Challenge difficulty tiers offered by the arena selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl ChallengeDifficulty {
    #[must_use]
    pub fn all() -> &'static [ChallengeDifficulty] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn css_token(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A selectable challenge topic. The catalog is fixed client-side reference
/// data; the backend only ever sees the `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTopic {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The topics the arena selector offers.
#[must_use]
pub fn challenge_topics() -> &'static [ChallengeTopic] {
    const TOPICS: &[ChallengeTopic] = &[
        ChallengeTopic {
            id: "general",
            name: "General Programming",
            icon: "🎯",
        },
        ChallengeTopic {
            id: "strings",
            name: "String Manipulation",
            icon: "📝",
        },
        ChallengeTopic {
            id: "arrays",
            name: "Arrays & Lists",
            icon: "📊",
        },
        ChallengeTopic {
            id: "math",
            name: "Math & Numbers",
            icon: "🔢",
        },
        ChallengeTopic {
            id: "algorithms",
            name: "Algorithms",
            icon: "⚡",
        },
        ChallengeTopic {
            id: "data_structures",
            name: "Data Structures",
            icon: "🏗️",
        },
    ];
    TOPICS
}

//
// ─── SELECTION ────────────────────────────────────────────────────────────────
//

/// The user's difficulty/topic picks. These survive challenge regenerations
/// and resets: they are defaults for the next generate call, not session
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSelection {
    difficulty: ChallengeDifficulty,
    topic: String,
}

impl Default for ChallengeSelection {
    fn default() -> Self {
        Self {
            difficulty: ChallengeDifficulty::Easy,
            topic: "general".to_string(),
        }
    }
}

impl ChallengeSelection {
    #[must_use]
    pub fn difficulty(&self) -> ChallengeDifficulty {
        self.difficulty
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn select_difficulty(&mut self, difficulty: ChallengeDifficulty) {
        self.difficulty = difficulty;
    }

    pub fn select_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }
}

//
// ─── SESSION & VERDICT ────────────────────────────────────────────────────────
//

/// The single live coding challenge.
///
/// The topic is stamped from the selection that generated the challenge; the
/// backend does not echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSession {
    id: ChallengeId,
    title: String,
    description: String,
    difficulty: ChallengeDifficulty,
    topic: String,
    xp_reward: u32,
    starter_code: String,
    hints: Vec<String>,
}

impl ChallengeSession {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: ChallengeId,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: ChallengeDifficulty,
        topic: impl Into<String>,
        xp_reward: u32,
        starter_code: impl Into<String>,
        hints: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            difficulty,
            topic: topic.into(),
            xp_reward,
            starter_code: starter_code.into(),
            hints,
        }
    }

    #[must_use]
    pub fn id(&self) -> ChallengeId {
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
    pub fn difficulty(&self) -> ChallengeDifficulty {
        self.difficulty
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    #[must_use]
    pub fn starter_code(&self) -> &str {
        &self.starter_code
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

/// Backend verdict on a submitted solution. A failed verdict is a normal
/// negative path, not an error; the session stays live for resubmission.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeVerdict {
    pub passed: bool,
    pub feedback: String,
    pub xp_earned: u32,
    pub bonus_xp: u32,
    pub reward: RewardGrant,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_match_the_selector() {
        let selection = ChallengeSelection::default();
        assert_eq!(selection.difficulty(), ChallengeDifficulty::Easy);
        assert_eq!(selection.topic(), "general");
    }

    #[test]
    fn selection_mutations_are_sticky_and_local() {
        let mut selection = ChallengeSelection::default();
        selection.select_difficulty(ChallengeDifficulty::Hard);
        selection.select_topic("algorithms");

        assert_eq!(selection.difficulty(), ChallengeDifficulty::Hard);
        assert_eq!(selection.topic(), "algorithms");
    }

    #[test]
    fn topic_catalog_is_fixed() {
        let topics = challenge_topics();
        assert_eq!(topics.len(), 6);
        assert!(topics.iter().any(|topic| topic.id == "data_structures"));
    }
}
