use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use gamify_core::Clock;
use gamify_core::model::PlayerStats;
use services::RewardFeedback;

use crate::context::AppContext;
use crate::views::rewards::{RewardCx, StatsCx};
use crate::views::{ArenaView, DashboardView, LevelUpOverlay, QuestsView, QuizView, StatsBar, XpPopup};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/quests", QuestsView)] Quests {},
        #[route("/arena", ArenaView)] Arena {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let stats = use_signal(PlayerStats::default);
    let stats_epoch = use_signal(|| 0u64);
    let feedback = use_signal(|| RewardFeedback::new(Clock::default_clock()));
    use_context_provider(|| StatsCx { stats });
    use_context_provider(|| RewardCx {
        feedback,
        stats_epoch,
    });

    // Fetch on mount and again whenever a reward bumps the epoch. A failed
    // refresh keeps whatever is already on screen.
    let stats_service = ctx.stats();
    let _stats_loader = use_resource(move || {
        let stats_service = stats_service.clone();
        let mut stats = stats;
        async move {
            let _ = stats_epoch();
            if let Ok(latest) = stats_service.load().await {
                stats.set(latest);
            }
        }
    });

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                StatsBar {}
                Outlet::<Route> {}
            }
            XpPopup {}
            LevelUpOverlay {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Gamify" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Quiz {}, "Document Quest" } }
                li { Link { to: Route::Quests {}, "Task Warrior" } }
                li { Link { to: Route::Arena {}, "Code Arena" } }
            }
        }
    }
}
