/// One entry of the achievement catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// A catalog entry paired with its unlocked state for the current player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    pub unlocked: bool,
}

/// The fixed achievement catalog.
///
/// Modeled as an injected table rather than a literal scattered through the
/// view code, so catalog changes stay in one place. The backend only reports
/// unlocked ids; names, descriptions and icons live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCatalog {
    entries: Vec<Achievement>,
}

impl AchievementCatalog {
    #[must_use]
    pub fn new(entries: Vec<Achievement>) -> Self {
        Self { entries }
    }

    /// The ten achievements the application ships with.
    #[must_use]
    pub fn builtin() -> Self {
        fn entry(id: &str, name: &str, description: &str, icon: &str) -> Achievement {
            Achievement {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
            }
        }

        Self::new(vec![
            entry("first_quiz", "Quiz Novice", "Complete your first quiz", "📚"),
            entry("quiz_master", "Quiz Master", "Get 100% on a quiz", "🎓"),
            entry(
                "quest_starter",
                "Quest Starter",
                "Complete your first quest",
                "⚔️",
            ),
            entry("quest_slayer", "Quest Slayer", "Complete 10 quests", "🗡️"),
            entry(
                "code_warrior",
                "Code Warrior",
                "Solve your first challenge",
                "💻",
            ),
            entry("code_legend", "Code Legend", "Solve 10 challenges", "🏆"),
            entry("streak_3", "On Fire", "3 day streak", "🔥"),
            entry("streak_7", "Unstoppable", "7 day streak", "⚡"),
            entry("level_5", "Rising Star", "Reach level 5", "⭐"),
            entry("level_10", "Champion", "Reach level 10", "👑"),
        ])
    }

    #[must_use]
    pub fn entries(&self) -> &[Achievement] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project every catalog entry against the backend-reported unlocked set,
    /// preserving catalog order. Ids outside the catalog are ignored.
    #[must_use]
    pub fn statuses(&self, unlocked: &[String]) -> Vec<AchievementStatus> {
        self.entries
            .iter()
            .map(|achievement| AchievementStatus {
                unlocked: unlocked.iter().any(|id| *id == achievement.id),
                achievement: achievement.clone(),
            })
            .collect()
    }

    /// How many of the unlocked ids actually exist in this catalog.
    #[must_use]
    pub fn unlocked_count(&self, unlocked: &[String]) -> usize {
        self.entries
            .iter()
            .filter(|achievement| unlocked.iter().any(|id| *id == achievement.id))
            .count()
    }
}
