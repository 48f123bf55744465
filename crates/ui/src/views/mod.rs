mod arena;
mod dashboard;
mod quests;
mod quiz;
pub mod rewards;

pub use arena::ArenaView;
pub use dashboard::{DashboardView, StatsBar};
pub use quests::QuestsView;
pub use quiz::QuizView;
pub use rewards::{LevelUpOverlay, RewardCx, StatsCx, XpPopup};
