use dioxus::prelude::*;

use gamify_core::model::Quest;

use crate::context::AppContext;
use crate::views::rewards::RewardCx;
use crate::vm::{QuestPhase, QuestVm};

#[component]
pub fn QuestsView() -> Element {
    let ctx = use_context::<AppContext>();
    let rewards = use_context::<RewardCx>();
    let quest_service = ctx.quests();
    let vm = use_signal(QuestVm::new);
    let mut goal = use_signal(String::new);
    let mut context_input = use_signal(String::new);

    let phase = vm.read().phase();
    let busy = vm.read().busy();
    let notice = vm.read().notice().map(str::to_string);

    let generate_service = quest_service.clone();
    let on_generate = move |_: MouseEvent| {
        let quest_service = generate_service.clone();
        let goal = goal();
        let context = context_input();
        let mut vm = vm;
        spawn(async move {
            vm.write().begin_generate();
            let result = quest_service.generate(&goal, &context).await;
            vm.write().finish_generate(result);
        });
    };

    let on_reset = move |_: MouseEvent| {
        let mut vm = vm;
        let mut goal = goal;
        let mut context_input = context_input;
        vm.write().reset();
        goal.set(String::new());
        context_input.set(String::new());
    };

    let complete_service = quest_service.clone();
    let quest_item = move |quest: &Quest, is_boss: bool| {
        let quest_id = quest.id();
        let completed = quest.is_completed();
        let title = quest.title().to_string();
        let description = quest.description().to_string();
        let difficulty = quest.difficulty();
        let xp_reward = quest.xp_reward();
        let difficulty_label = difficulty.label();
        let difficulty_class = format!("quest-difficulty difficulty-{}", difficulty.css_token());
        let quest_service = complete_service.clone();
        let mut vm = vm;
        let mut rewards = rewards;
        let boss_marker = if is_boss { "👹 " } else { "" };
        rsx! {
            div {
                key: "{quest_id}",
                class: if completed { "quest-item completed" } else { "quest-item" },
                button {
                    class: if completed { "quest-checkbox checked" } else { "quest-checkbox" },
                    r#type: "button",
                    disabled: completed,
                    onclick: move |_| {
                        let quest_service = quest_service.clone();
                        spawn(async move {
                            let Some(line_id) = vm.read().line_id() else {
                                return;
                            };
                            let outcome = quest_service.complete(line_id, quest_id).await;
                            if let Some(reward) = vm.write().apply_completion(quest_id, outcome) {
                                rewards.celebrate(reward);
                            }
                        });
                    },
                    if completed { "✓" }
                }
                div { class: "quest-content",
                    div { class: "quest-title", "{boss_marker}{title}" }
                    div { class: "quest-description", "{description}" }
                }
                span { class: "{difficulty_class}", "{difficulty_label}" }
                span { class: "quest-xp", "+{xp_reward} XP" }
            }
        }
    };

    let body = match phase {
        QuestPhase::Input => rsx! {
            div { class: "workflow-input",
                input {
                    class: "goal-input",
                    placeholder: "What do you want to achieve?",
                    value: "{goal}",
                    oninput: move |evt| goal.set(evt.value()),
                }
                textarea {
                    class: "context-input",
                    placeholder: "Optional context (deadline, constraints, ...)",
                    value: "{context_input}",
                    oninput: move |evt| context_input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_generate,
                    if busy { "Creating Quest Line..." } else { "⚔️ Create Quest Line" }
                }
            }
        },
        QuestPhase::Active => {
            let line = vm.read().line().cloned();
            match line {
                Some(line) => {
                    let goal_text = line.goal().to_string();
                    let line_total_xp = line.total_xp();
                    let progress = line.progress();
                    let quest_items = line
                        .quests()
                        .iter()
                        .map(|quest| quest_item(quest, false))
                        .collect::<Vec<_>>();
                    let boss_item = line.boss_quest().map(|boss| quest_item(boss, true));
                    rsx! {
                        div { class: "quest-line",
                            h3 { class: "quest-goal", "⚔️ {goal_text}" }
                            p { class: "quest-intro",
                                "Complete all quests to earn {line_total_xp} XP!"
                            }
                            p { class: "quest-progress",
                                "{progress.completed}/{progress.total} quests · {progress.percentage}% · {progress.xp_earned} XP earned"
                            }
                            div { class: "quests-list", {quest_items.into_iter()} }
                            if let Some(boss) = boss_item {
                                h4 { class: "boss-heading", "👹 BOSS QUEST" }
                                {boss}
                            }
                            button {
                                class: "btn btn-secondary btn-block",
                                r#type: "button",
                                onclick: on_reset,
                                "🔄 New Quest Line"
                            }
                        }
                    }
                }
                None => rsx! {
                    p { "No quest line loaded." }
                },
            }
        }
    };

    rsx! {
        div { class: "page quests-page",
            header { class: "view-header",
                h2 { class: "view-title", "⚔️ Task Warrior" }
                p { class: "view-subtitle", "Turn a goal into an RPG quest line." }
            }
            if let Some(notice) = notice {
                p { class: "notice", "{notice}" }
            }
            {body}
        }
    }
}
