mod achievements;
mod challenge;
mod ids;
mod quest;
mod quiz;
mod reward;
mod stats;

pub use achievements::{Achievement, AchievementCatalog, AchievementStatus};
pub use challenge::{
    ChallengeDifficulty, ChallengeSelection, ChallengeSession, ChallengeTopic, ChallengeVerdict,
    challenge_topics,
};
pub use ids::{ChallengeId, QuestId, QuestLineId, QuizId};
pub use quest::{Quest, QuestDifficulty, QuestLine, QuestProgress};
pub use quiz::{AnswerSheet, QuestionReview, QuizError, QuizQuestion, QuizReport, QuizSession};
pub use reward::RewardGrant;
pub use stats::PlayerStats;
