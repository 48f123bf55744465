mod arena_vm;
mod quest_vm;
mod quiz_vm;
mod reward_vm;
mod stats_vm;

pub use arena_vm::{ArenaPhase, ArenaVm};
pub use quest_vm::{QuestPhase, QuestVm};
pub use quiz_vm::{QuizPhase, QuizVm};
pub use reward_vm::format_xp_delta;
pub use stats_vm::{AchievementTileVm, StatsVm, map_stats};
