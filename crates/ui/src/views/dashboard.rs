use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::rewards::StatsCx;
use crate::vm::map_stats;

/// Always-visible header strip: level, XP bar, streak, achievement count.
#[component]
pub fn StatsBar() -> Element {
    let ctx = use_context::<AppContext>();
    let stats_cx = use_context::<StatsCx>();
    let catalog = ctx.achievement_catalog();
    let vm = map_stats(&stats_cx.stats.read(), catalog.as_ref());

    rsx! {
        header { class: "stats-bar",
            div { class: "stat",
                span { class: "stat-value level-badge", "{vm.level}" }
                span { class: "stat-label", "Level" }
            }
            div { class: "stat stat-xp",
                div { class: "xp-numbers",
                    span { class: "xp-current", "{vm.xp_label}" }
                    span { class: "xp-goal", "{vm.xp_goal_label}" }
                }
                div { class: "xp-bar",
                    div { class: "xp-bar-fill", style: "width: {vm.progress_percent}%" }
                }
            }
            div { class: "stat",
                span { class: "stat-value", "🔥 {vm.streak}" }
                span { class: "stat-label", "Day streak" }
            }
            div { class: "stat",
                span { class: "stat-value", "{vm.achievements_label}" }
                span { class: "stat-label", "Achievements" }
            }
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let stats_cx = use_context::<StatsCx>();
    let catalog = ctx.achievement_catalog();
    let vm = map_stats(&stats_cx.stats.read(), catalog.as_ref());

    let tiles = vm.tiles.iter().map(|tile| {
        rsx! {
            div {
                key: "{tile.name}",
                class: if tile.unlocked { "achievement-item" } else { "achievement-item locked" },
                span { class: "achievement-icon", "{tile.icon}" }
                span { class: "achievement-name", "{tile.name}" }
                span { class: "achievement-desc", "{tile.description}" }
            }
        }
    });

    rsx! {
        div { class: "page dashboard",
            header { class: "view-header",
                h2 { class: "view-title", "Gamify everything" }
                p { class: "view-subtitle",
                    "Turn documents into quizzes, goals into quest lines and practice into code battles."
                }
            }
            section { class: "modules",
                Link { class: "module-card", to: Route::Quiz {},
                    h3 { "📚 Document Quest" }
                    p { "Paste any text and battle the quiz it becomes." }
                }
                Link { class: "module-card", to: Route::Quests {},
                    h3 { "⚔️ Task Warrior" }
                    p { "Break a goal into an RPG quest line with a boss fight." }
                }
                Link { class: "module-card", to: Route::Arena {},
                    h3 { "💻 Code Arena" }
                    p { "Generate a coding challenge and submit your solution." }
                }
            }
            section { class: "achievements",
                h3 { "Achievements" }
                div { class: "achievements-grid", {tiles} }
            }
        }
    }
}
