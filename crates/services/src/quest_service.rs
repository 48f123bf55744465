use std::sync::Arc;

use tracing::warn;

use gamify_core::model::{
    Quest, QuestDifficulty, QuestId, QuestLine, QuestLineId, RewardGrant,
};

use crate::api::{GamifyApi, QuestPayload};
use crate::error::QuestServiceError;

/// Quest workflow: turn a goal into a quest line and confirm completions.
///
/// Completion is confirmation-gated: the local monotonic flip happens in the
/// view-model only after this service relays `completed: true` from the
/// backend. A negative confirmation is a silent no-op by design.
#[derive(Clone)]
pub struct QuestService {
    api: Arc<dyn GamifyApi>,
}

impl QuestService {
    #[must_use]
    pub fn new(api: Arc<dyn GamifyApi>) -> Self {
        Self { api }
    }

    /// Generate a quest line for a goal, with optional extra context.
    ///
    /// # Errors
    ///
    /// Returns `QuestServiceError::EmptyGoal` (before any network call) when
    /// the goal is empty after trimming, or `Api` on transport failures.
    pub async fn generate(
        &self,
        goal: &str,
        context: &str,
    ) -> Result<QuestLine, QuestServiceError> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(QuestServiceError::EmptyGoal);
        }

        let response = self
            .api
            .generate_quests(goal, context.trim())
            .await
            .inspect_err(|err| {
                warn!("quests: generation failed: {err}");
            })?;

        let quests = response.quests.into_iter().map(quest_from_payload).collect();
        let boss_quest = response.boss_quest.map(quest_from_payload);
        Ok(QuestLine::new(
            QuestLineId::new(response.quest_line_id),
            response.goal,
            quests,
            boss_quest,
            response.total_xp,
        ))
    }

    /// Ask the backend to confirm a quest completion.
    ///
    /// Returns `Some(reward)` when the backend confirmed, `None` when it
    /// declined (unknown or already-completed quest); the caller mutates
    /// nothing on a decline.
    ///
    /// # Errors
    ///
    /// Returns `Api` on transport failures; local state stays untouched.
    pub async fn complete(
        &self,
        quest_line_id: QuestLineId,
        quest_id: QuestId,
    ) -> Result<Option<RewardGrant>, QuestServiceError> {
        let response = self
            .api
            .complete_quest(quest_line_id, quest_id)
            .await
            .inspect_err(|err| {
                warn!("quests: completion failed for quest {quest_id} in line {quest_line_id}: {err}");
            })?;

        if !response.completed {
            return Ok(None);
        }

        Ok(Some(RewardGrant::new(
            i64::from(response.xp_earned),
            response.leveled_up.then_some(response.level),
        )))
    }
}

fn quest_from_payload(payload: QuestPayload) -> Quest {
    Quest::new(
        QuestId::new(payload.id),
        payload.title,
        payload.description,
        QuestDifficulty::parse(&payload.difficulty).unwrap_or_default(),
        payload.xp_reward,
        payload.completed,
    )
}
