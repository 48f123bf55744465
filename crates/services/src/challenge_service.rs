use std::sync::Arc;

use tracing::warn;

use gamify_core::model::{
    ChallengeDifficulty, ChallengeId, ChallengeSelection, ChallengeSession, ChallengeVerdict,
    RewardGrant,
};

use crate::api::GamifyApi;
use crate::error::ChallengeServiceError;

/// Code arena workflow: generate a challenge from the sticky
/// difficulty/topic selection, submit solutions for a verdict.
///
/// A failed verdict leaves the session untouched; the user can resubmit
/// against the same challenge id indefinitely.
#[derive(Clone)]
pub struct ChallengeService {
    api: Arc<dyn GamifyApi>,
}

impl ChallengeService {
    #[must_use]
    pub fn new(api: Arc<dyn GamifyApi>) -> Self {
        Self { api }
    }

    /// Generate a challenge for the given selection.
    ///
    /// The returned session is stamped with the requested topic (the backend
    /// does not echo it) and with the difficulty the backend actually chose.
    ///
    /// # Errors
    ///
    /// Returns `Api` on transport failures.
    pub async fn generate(
        &self,
        selection: &ChallengeSelection,
    ) -> Result<ChallengeSession, ChallengeServiceError> {
        let response = self
            .api
            .generate_challenge(selection.difficulty().label(), selection.topic())
            .await
            .inspect_err(|err| {
                warn!("arena: challenge generation failed: {err}");
            })?;

        let difficulty = ChallengeDifficulty::parse(&response.difficulty)
            .unwrap_or(selection.difficulty());
        Ok(ChallengeSession::new(
            ChallengeId::new(response.challenge_id),
            response.title,
            response.description,
            difficulty,
            selection.topic(),
            response.xp_reward,
            response.starter_code,
            response.hints,
        ))
    }

    /// Submit a solution for the live challenge.
    ///
    /// On a pass the reward carries `xp_earned + bonus_xp` (the challenge
    /// bonus is reported separately by the backend); on a fail the reward is
    /// empty and only the feedback text is meaningful.
    ///
    /// # Errors
    ///
    /// Returns `Api` on transport failures, including a stale challenge id.
    pub async fn submit(
        &self,
        session: &ChallengeSession,
        code: &str,
    ) -> Result<ChallengeVerdict, ChallengeServiceError> {
        let response = self
            .api
            .submit_code(session.id(), code)
            .await
            .inspect_err(|err| {
                warn!("arena: submission failed for challenge {}: {err}", session.id());
            })?;

        let reward = if response.passed {
            RewardGrant::new(
                i64::from(response.xp_earned) + i64::from(response.bonus_xp),
                response.leveled_up.then_some(response.level),
            )
        } else {
            RewardGrant::none()
        };

        Ok(ChallengeVerdict {
            passed: response.passed,
            feedback: response.feedback,
            xp_earned: response.xp_earned,
            bonus_xp: response.bonus_xp,
            reward,
        })
    }
}
