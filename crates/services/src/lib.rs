#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod challenge_service;
pub mod error;
pub mod quest_service;
pub mod quiz_service;
pub mod rewards;
pub mod stats_service;

pub use gamify_core::Clock;

pub use api::{ApiError, GamifyApi, HttpGamifyApi};
pub use app_services::AppServices;
pub use challenge_service::ChallengeService;
pub use error::{ChallengeServiceError, QuestServiceError, QuizServiceError, StatsServiceError};
pub use quest_service::QuestService;
pub use quiz_service::QuizService;
pub use rewards::{LEVEL_UP_DURATION_MS, RewardFeedback, XP_POPUP_DURATION_MS};
pub use stats_service::StatsService;
