/// Read-only projection of the player's gamification state.
///
/// Fetched from the backend on every stats refresh; the client never derives
/// or mutates these numbers locally.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub xp_progress_percent: f64,
    pub streak: u32,
    /// Ids of unlocked achievements, a subset of the client-side catalog.
    pub unlocked: Vec<String>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next: 100,
            xp_progress_percent: 0.0,
            streak: 0,
            unlocked: Vec::new(),
        }
    }
}

impl PlayerStats {
    #[must_use]
    pub fn has_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|unlocked| unlocked == id)
    }
}
