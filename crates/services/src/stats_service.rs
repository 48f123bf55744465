use std::sync::Arc;

use tracing::warn;

use gamify_core::model::PlayerStats;

use crate::api::GamifyApi;
use crate::error::StatsServiceError;

/// Read-only stats refresh.
///
/// On failure the caller keeps whatever it was showing; the failure is
/// logged here and nothing else happens (no retry, no user-facing error).
#[derive(Clone)]
pub struct StatsService {
    api: Arc<dyn GamifyApi>,
}

impl StatsService {
    #[must_use]
    pub fn new(api: Arc<dyn GamifyApi>) -> Self {
        Self { api }
    }

    /// Fetch the current player stats.
    ///
    /// # Errors
    ///
    /// Returns `Api` on transport failures (already logged).
    pub async fn load(&self) -> Result<PlayerStats, StatsServiceError> {
        let response = self.api.fetch_stats().await.inspect_err(|err| {
            warn!("stats: refresh failed: {err}");
        })?;

        Ok(PlayerStats {
            level: response.level,
            xp: response.xp,
            xp_to_next: response.xp_to_next,
            xp_progress_percent: response.xp_progress_percent,
            streak: response.streak,
            unlocked: response
                .achievements
                .into_iter()
                .map(|achievement| achievement.id)
                .collect(),
        })
    }
}
