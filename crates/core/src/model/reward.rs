/// Reward signals attached to a graded submission or quest completion.
///
/// This is what the transient reward feedback consumes: a signed XP delta for
/// the popup and, on level-up, the new level for the overlay. It never feeds
/// back into stats or session data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardGrant {
    pub xp_delta: i64,
    pub new_level: Option<u32>,
}

impl RewardGrant {
    #[must_use]
    pub fn new(xp_delta: i64, new_level: Option<u32>) -> Self {
        Self {
            xp_delta,
            new_level,
        }
    }

    /// A grant that triggers no feedback at all.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xp_delta == 0 && self.new_level.is_none()
    }
}
