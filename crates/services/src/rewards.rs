use chrono::{DateTime, Duration, Utc};

use gamify_core::Clock;
use gamify_core::model::RewardGrant;

/// How long the XP popup stays visible.
pub const XP_POPUP_DURATION_MS: i64 = 2000;
/// How long the level-up overlay stays visible.
pub const LEVEL_UP_DURATION_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Notice<T> {
    value: T,
    generation: u64,
    deadline: DateTime<Utc>,
}

/// Pending-dismissal handles for a shown grant: the XP popup generation and
/// the level-up overlay generation, when each was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShownReward {
    pub xp_generation: Option<u64>,
    pub level_generation: Option<u64>,
}

/// Transient reward notices: an XP popup and a level-up overlay, each
/// self-expiring on a fixed timer.
///
/// Re-triggering a visible notice replaces its value and restarts its timer;
/// nothing stacks or queues. Each trigger returns a generation token, and a
/// dismissal only clears the notice if its token is still current; a
/// dismissal scheduled for a replaced notice is a no-op. Presentation only:
/// nothing here touches stats or session data.
#[derive(Debug)]
pub struct RewardFeedback {
    clock: Clock,
    next_generation: u64,
    xp: Option<Notice<i64>>,
    level: Option<Notice<u32>>,
}

impl RewardFeedback {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            next_generation: 0,
            xp: None,
            level: None,
        }
    }

    /// Advance a fixed clock by `delta`. Has no effect on a real-time clock.
    pub fn advance(&mut self, delta: Duration) {
        self.clock.advance(delta);
    }

    /// Show (or replace) the XP popup. Returns the generation token for the
    /// matching dismissal.
    pub fn show_xp(&mut self, delta: i64) -> u64 {
        let generation = self.bump_generation();
        self.xp = Some(Notice {
            value: delta,
            generation,
            deadline: self.clock.now() + Duration::milliseconds(XP_POPUP_DURATION_MS),
        });
        generation
    }

    /// Show (or replace) the level-up overlay. Returns the generation token
    /// for the matching dismissal.
    pub fn show_level_up(&mut self, level: u32) -> u64 {
        let generation = self.bump_generation();
        self.level = Some(Notice {
            value: level,
            generation,
            deadline: self.clock.now() + Duration::milliseconds(LEVEL_UP_DURATION_MS),
        });
        generation
    }

    /// Trigger whatever a grant carries: XP popup for a non-zero delta, the
    /// overlay for a new level.
    pub fn show(&mut self, grant: RewardGrant) -> ShownReward {
        let mut shown = ShownReward::default();
        if grant.xp_delta != 0 {
            shown.xp_generation = Some(self.show_xp(grant.xp_delta));
        }
        if let Some(level) = grant.new_level {
            shown.level_generation = Some(self.show_level_up(level));
        }
        shown
    }

    /// The XP delta currently on screen, if the popup has not expired.
    #[must_use]
    pub fn visible_xp(&self) -> Option<i64> {
        let now = self.clock.now();
        self.xp.filter(|notice| now < notice.deadline).map(|notice| notice.value)
    }

    /// The level currently celebrated, if the overlay has not expired.
    #[must_use]
    pub fn visible_level(&self) -> Option<u32> {
        let now = self.clock.now();
        self.level
            .filter(|notice| now < notice.deadline)
            .map(|notice| notice.value)
    }

    /// Clear the XP popup if `generation` is still the one on screen.
    /// A stale generation (the popup was re-triggered since) does nothing.
    pub fn dismiss_xp(&mut self, generation: u64) {
        if self.xp.is_some_and(|notice| notice.generation == generation) {
            self.xp = None;
        }
    }

    /// Clear the level-up overlay if `generation` is still current.
    pub fn dismiss_level_up(&mut self, generation: u64) {
        if self
            .level
            .is_some_and(|notice| notice.generation == generation)
        {
            self.level = None;
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use gamify_core::time::fixed_clock;

    #[test]
    fn xp_popup_hides_after_exactly_its_duration() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        feedback.show_xp(25);

        feedback.advance(Duration::milliseconds(XP_POPUP_DURATION_MS - 1));
        assert_eq!(feedback.visible_xp(), Some(25));

        feedback.advance(Duration::milliseconds(1));
        assert_eq!(feedback.visible_xp(), None);
    }

    #[test]
    fn level_overlay_outlives_the_xp_popup() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        feedback.show(RewardGrant::new(50, Some(3)));

        feedback.advance(Duration::milliseconds(XP_POPUP_DURATION_MS));
        assert_eq!(feedback.visible_xp(), None);
        assert_eq!(feedback.visible_level(), Some(3));

        feedback.advance(Duration::milliseconds(
            LEVEL_UP_DURATION_MS - XP_POPUP_DURATION_MS,
        ));
        assert_eq!(feedback.visible_level(), None);
    }

    #[test]
    fn retrigger_replaces_the_value_and_restarts_the_timer() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        feedback.show_xp(10);

        feedback.advance(Duration::milliseconds(1500));
        feedback.show_xp(40);
        assert_eq!(feedback.visible_xp(), Some(40));

        // 1900ms after the first trigger, 400ms after the second: still up.
        feedback.advance(Duration::milliseconds(400));
        assert_eq!(feedback.visible_xp(), Some(40));

        feedback.advance(Duration::milliseconds(XP_POPUP_DURATION_MS - 400));
        assert_eq!(feedback.visible_xp(), None);
    }

    #[test]
    fn stale_dismissal_is_a_no_op() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        let first = feedback.show_xp(10);
        let _second = feedback.show_xp(40);

        feedback.dismiss_xp(first);
        assert_eq!(feedback.visible_xp(), Some(40));
    }

    #[test]
    fn current_dismissal_clears_the_notice() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        let generation = feedback.show_level_up(5);

        feedback.dismiss_level_up(generation);
        assert_eq!(feedback.visible_level(), None);
    }

    #[test]
    fn empty_grant_shows_nothing() {
        let mut feedback = RewardFeedback::new(fixed_clock());
        let shown = feedback.show(RewardGrant::none());

        assert_eq!(shown, ShownReward::default());
        assert_eq!(feedback.visible_xp(), None);
        assert_eq!(feedback.visible_level(), None);
    }
}
