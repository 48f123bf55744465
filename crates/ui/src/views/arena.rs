use dioxus::prelude::*;

use gamify_core::model::{ChallengeDifficulty, challenge_topics};

use crate::context::AppContext;
use crate::views::rewards::RewardCx;
use crate::vm::{ArenaPhase, ArenaVm};

#[component]
pub fn ArenaView() -> Element {
    let ctx = use_context::<AppContext>();
    let rewards = use_context::<RewardCx>();
    let challenge_service = ctx.challenges();
    let vm = use_signal(ArenaVm::new);
    let mut code = use_signal(String::new);

    let phase = vm.read().phase();
    let busy = vm.read().busy();
    let notice = vm.read().notice().map(str::to_string);

    let generate_service = challenge_service.clone();
    let on_generate = move |_: MouseEvent| {
        let challenge_service = generate_service.clone();
        let mut vm = vm;
        let mut code = code;
        spawn(async move {
            let selection = vm.read().selection().clone();
            vm.write().begin_generate();
            let result = challenge_service.generate(&selection).await;
            let generated = result.is_ok();
            vm.write().finish_generate(result);
            if generated {
                if let Some(session) = vm.read().session() {
                    code.set(session.starter_code().to_string());
                }
            }
        });
    };

    let submit_service = challenge_service.clone();
    let on_submit = move |_: MouseEvent| {
        let challenge_service = submit_service.clone();
        let solution = code();
        let mut vm = vm;
        let mut rewards = rewards;
        spawn(async move {
            let Some(session) = vm.write().begin_submit() else {
                return;
            };
            let result = challenge_service.submit(&session, &solution).await;
            if let Some(reward) = vm.write().finish_submit(result) {
                rewards.celebrate(reward);
            }
        });
    };

    let on_reset = move |_: MouseEvent| {
        let mut vm = vm;
        let mut code = code;
        vm.write().reset();
        code.set(String::new());
    };

    let body = match phase {
        ArenaPhase::Select => {
            let selected_difficulty = vm.read().selection().difficulty();
            let selected_topic = vm.read().selection().topic().to_string();

            let difficulty_buttons = ChallengeDifficulty::all().iter().map(|difficulty| {
                let difficulty = *difficulty;
                let label = difficulty.label();
                let active = difficulty == selected_difficulty;
                let mut vm = vm;
                rsx! {
                    button {
                        key: "{label}",
                        class: if active { "difficulty-btn active" } else { "difficulty-btn" },
                        r#type: "button",
                        onclick: move |_| {
                            vm.write().select_difficulty(difficulty);
                        },
                        "{label}"
                    }
                }
            });

            let topic_buttons = challenge_topics().iter().map(|topic| {
                let topic_id = topic.id;
                let name = topic.name;
                let icon = topic.icon;
                let active = topic_id == selected_topic;
                let mut vm = vm;
                rsx! {
                    button {
                        key: "{topic_id}",
                        class: if active { "topic-btn active" } else { "topic-btn" },
                        r#type: "button",
                        onclick: move |_| {
                            vm.write().select_topic(topic_id);
                        },
                        span { class: "topic-icon", "{icon}" }
                        span { "{name}" }
                    }
                }
            });

            rsx! {
                div { class: "arena-select",
                    h4 { "Difficulty" }
                    div { class: "difficulty-row", {difficulty_buttons} }
                    h4 { "Topic" }
                    div { class: "topic-grid", {topic_buttons} }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: busy,
                        onclick: on_generate,
                        if busy { "Generating Challenge..." } else { "⚡ Start Challenge" }
                    }
                }
            }
        }
        ArenaPhase::Editor => {
            let session = vm.read().session().cloned();
            match session {
                Some(session) => {
                    let title = session.title().to_string();
                    let description = session.description().to_string();
                    let xp_reward = session.xp_reward();
                    let difficulty_label = session.difficulty().label();
                    let difficulty_class = format!(
                        "quest-difficulty difficulty-{}",
                        session.difficulty().css_token()
                    );
                    let hints = session.hints().to_vec();
                    let hint_items = hints.iter().enumerate().map(|(index, hint)| {
                        rsx! {
                            div { key: "{index}", class: "hint-item",
                                span { class: "hint-icon", "💡" }
                                span { "{hint}" }
                            }
                        }
                    });
                    let verdict = vm.read().verdict().cloned();
                    let verdict_panel = verdict.map(|verdict| {
                        let heading = if verdict.passed {
                            "✅ Challenge Complete!"
                        } else {
                            "❌ Not Quite Right"
                        };
                        let reward_line = verdict.passed.then(|| {
                            let mut line = format!("+{} XP earned!", verdict.xp_earned);
                            if verdict.bonus_xp > 0 {
                                line.push_str(&format!(" (+{} bonus!)", verdict.bonus_xp));
                            }
                            line
                        });
                        rsx! {
                            div {
                                class: if verdict.passed { "challenge-result passed" } else { "challenge-result failed" },
                                h4 { "{heading}" }
                                p { class: "challenge-feedback", "{verdict.feedback}" }
                                if let Some(reward_line) = reward_line {
                                    p { class: "challenge-reward", "{reward_line}" }
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "arena-editor",
                            div { class: "challenge-header",
                                h3 { "{title}" }
                                span { class: "{difficulty_class}", "{difficulty_label}" }
                            }
                            p { class: "challenge-description", "{description}" }
                            p { class: "challenge-reward-line",
                                "🎯 Reward: +{xp_reward} XP (bonus for an optimal solution!)"
                            }
                            textarea {
                                class: "code-input",
                                spellcheck: "false",
                                value: "{code}",
                                oninput: move |evt| code.set(evt.value()),
                            }
                            div { class: "hints",
                                h4 { "💡 Hints" }
                                {hint_items}
                            }
                            div { class: "arena-actions",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: busy,
                                    onclick: on_submit,
                                    "🚀 Submit Solution"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: on_reset,
                                    "🔄 New Challenge"
                                }
                            }
                            {verdict_panel}
                        }
                    }
                }
                None => rsx! {
                    p { "No challenge loaded." }
                },
            }
        }
    };

    rsx! {
        div { class: "page arena-page",
            header { class: "view-header",
                h2 { class: "view-title", "💻 Code Arena" }
                p { class: "view-subtitle", "Pick a difficulty and topic, then solve the challenge." }
            }
            if let Some(notice) = notice {
                p { class: "notice", "{notice}" }
            }
            {body}
        }
    }
}
