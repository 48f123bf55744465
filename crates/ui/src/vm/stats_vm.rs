use gamify_core::model::{AchievementCatalog, PlayerStats};

/// One achievement tile, locked or unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementTileVm {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
}

/// Display projection of `PlayerStats` plus the achievement catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsVm {
    pub level: u32,
    pub xp_label: String,
    pub xp_goal_label: String,
    pub progress_percent: f64,
    pub streak: u32,
    pub achievements_label: String,
    pub tiles: Vec<AchievementTileVm>,
}

/// Project stats into display values and recompute which catalog entries are
/// unlocked. The XP goal line shows the next level boundary (100 XP per
/// level).
#[must_use]
pub fn map_stats(stats: &PlayerStats, catalog: &AchievementCatalog) -> StatsVm {
    let xp_goal = u64::from(stats.level) * 100;
    let tiles = catalog
        .statuses(&stats.unlocked)
        .into_iter()
        .map(|status| AchievementTileVm {
            name: status.achievement.name,
            description: status.achievement.description,
            icon: status.achievement.icon,
            unlocked: status.unlocked,
        })
        .collect();

    StatsVm {
        level: stats.level,
        xp_label: stats.xp.to_string(),
        xp_goal_label: format!("/ {xp_goal} XP"),
        progress_percent: stats.xp_progress_percent.clamp(0.0, 100.0),
        streak: stats.streak,
        achievements_label: format!(
            "{}/{}",
            catalog.unlocked_count(&stats.unlocked),
            catalog.len()
        ),
        tiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_maps_to_locked_everything() {
        let vm = map_stats(&PlayerStats::default(), &AchievementCatalog::builtin());

        assert_eq!(vm.level, 1);
        assert_eq!(vm.xp_goal_label, "/ 100 XP");
        assert_eq!(vm.achievements_label, "0/10");
        assert!(vm.tiles.iter().all(|tile| !tile.unlocked));
    }

    #[test]
    fn unlocked_entries_are_recomputed_from_the_catalog() {
        let stats = PlayerStats {
            level: 3,
            xp: 250,
            xp_progress_percent: 50.0,
            unlocked: vec!["quiz_master".into(), "not_in_catalog".into()],
            ..PlayerStats::default()
        };

        let vm = map_stats(&stats, &AchievementCatalog::builtin());
        assert_eq!(vm.xp_goal_label, "/ 300 XP");
        assert_eq!(vm.achievements_label, "1/10");
        let unlocked: Vec<_> = vm
            .tiles
            .iter()
            .filter(|tile| tile.unlocked)
            .map(|tile| tile.name.as_str())
            .collect();
        assert_eq!(unlocked, vec!["Quiz Master"]);
    }

    #[test]
    fn progress_is_clamped_to_the_bar_range() {
        let stats = PlayerStats {
            xp_progress_percent: 140.0,
            ..PlayerStats::default()
        };
        let vm = map_stats(&stats, &AchievementCatalog::builtin());
        assert_eq!(vm.progress_percent, 100.0);
    }
}
