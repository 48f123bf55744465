use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

use gamify_core::model::{PlayerStats, RewardGrant};
use services::{LEVEL_UP_DURATION_MS, RewardFeedback, XP_POPUP_DURATION_MS};

use crate::vm::format_xp_delta;

/// Latest successfully fetched stats, shared through context. The layout
/// refreshes it; a failed refresh leaves the previous values in place.
#[derive(Clone, Copy)]
pub struct StatsCx {
    pub stats: Signal<PlayerStats>,
}

/// Reward plumbing shared through context: the transient notices plus the
/// epoch counter whose bumps trigger a stats refresh.
#[derive(Clone, Copy)]
pub struct RewardCx {
    pub feedback: Signal<RewardFeedback>,
    pub stats_epoch: Signal<u64>,
}

impl RewardCx {
    /// Fire whatever notices a grant carries, schedule their dismissals and
    /// bump the stats epoch.
    ///
    /// Each dismissal keeps the generation token of the notice it was
    /// scheduled for; if the notice has been replaced by then, the dismissal
    /// is a no-op and the replacement lives out its own full timer.
    pub fn celebrate(&mut self, grant: RewardGrant) {
        let shown = self.feedback.write().show(grant);

        if let Some(generation) = shown.xp_generation {
            let mut feedback = self.feedback;
            spawn(async move {
                sleep(Duration::from_millis(XP_POPUP_DURATION_MS as u64)).await;
                feedback.write().dismiss_xp(generation);
            });
        }
        if let Some(generation) = shown.level_generation {
            let mut feedback = self.feedback;
            spawn(async move {
                sleep(Duration::from_millis(LEVEL_UP_DURATION_MS as u64)).await;
                feedback.write().dismiss_level_up(generation);
            });
        }

        *self.stats_epoch.write() += 1;
    }
}

#[component]
pub fn XpPopup() -> Element {
    let rewards = use_context::<RewardCx>();
    let label = rewards.feedback.read().visible_xp().map(format_xp_delta);

    rsx! {
        if let Some(label) = label {
            div { class: "xp-popup",
                span { class: "xp-popup-value", "{label}" }
            }
        }
    }
}

#[component]
pub fn LevelUpOverlay() -> Element {
    let rewards = use_context::<RewardCx>();
    let visible = rewards.feedback.read().visible_level();

    rsx! {
        if let Some(level) = visible {
            div { class: "level-up-overlay",
                div { class: "level-up-card",
                    span { class: "level-up-icon", "🎉" }
                    h2 { "Level Up!" }
                    p { class: "level-up-value", "You reached level {level}" }
                }
            }
        }
    }
}
