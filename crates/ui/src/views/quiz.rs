use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::rewards::RewardCx;
use crate::vm::{QuizPhase, QuizVm};

fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let rewards = use_context::<RewardCx>();
    let quiz_service = ctx.quiz();
    let vm = use_signal(QuizVm::new);
    let mut content = use_signal(String::new);

    let phase = vm.read().phase();
    let busy = vm.read().busy();
    let notice = vm.read().notice().map(str::to_string);

    let generate_service = quiz_service.clone();
    let on_generate = move |_: MouseEvent| {
        let quiz_service = generate_service.clone();
        let content = content();
        let mut vm = vm;
        spawn(async move {
            vm.write().begin_generate();
            let result = quiz_service.generate(&content).await;
            vm.write().finish_generate(result);
        });
    };

    let submit_service = quiz_service.clone();
    let on_submit = move |_: MouseEvent| {
        let quiz_service = submit_service.clone();
        let mut vm = vm;
        let mut rewards = rewards;
        spawn(async move {
            let Some(session) = vm.write().begin_submit() else {
                return;
            };
            let result = quiz_service.submit(&session).await;
            if let Some(reward) = vm.write().finish_submit(result) {
                rewards.celebrate(reward);
            }
        });
    };

    let on_reset = move |_: MouseEvent| {
        let mut vm = vm;
        let mut content = content;
        vm.write().reset();
        content.set(String::new());
    };

    let body = match phase {
        QuizPhase::Input => rsx! {
            div { class: "workflow-input",
                textarea {
                    class: "content-input",
                    placeholder: "Paste the text you want to be quizzed on...",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_generate,
                    if busy { "Generating..." } else { "✨ Generate Quiz" }
                }
            }
        },
        QuizPhase::Active => {
            let session = vm.read().session().cloned();
            match session {
                Some(session) => {
                    let quiz_title = session.title().to_string();
                    let quiz_total_xp = session.total_xp();
                    let question_count = session.questions().len();
                    let question_cards =
                        session.questions().iter().enumerate().map(|(question_index, question)| {
                            let question_number = question_index + 1;
                            let options = question.options.iter().enumerate().map(|(option_index, option)| {
                                let letter = option_letter(option_index);
                                let selected =
                                    vm.read().selected(question_index) == Some(option_index);
                                let mut vm = vm;
                                rsx! {
                                    button {
                                        key: "{question_index}-{option_index}",
                                        class: if selected { "option-item selected" } else { "option-item" },
                                        r#type: "button",
                                        onclick: move |_| {
                                            vm.write().select_answer(question_index, option_index);
                                        },
                                        span { class: "option-letter", "{letter}" }
                                        span { "{option}" }
                                    }
                                }
                            });
                            rsx! {
                                div { key: "{question_index}", class: "quiz-question",
                                    div { class: "question-number",
                                        "Question {question_number} of {question_count}"
                                    }
                                    div { class: "question-text", "{question.text}" }
                                    div { class: "options-list", {options} }
                                }
                            }
                        });
                    rsx! {
                        div { class: "quiz-active",
                            h3 { class: "quiz-title", "📝 {quiz_title}" }
                            p { class: "quiz-intro",
                                "Answer all questions to earn up to {quiz_total_xp} XP!"
                            }
                            {question_cards}
                            button {
                                class: "btn btn-primary btn-block",
                                r#type: "button",
                                disabled: busy,
                                onclick: on_submit,
                                "✅ Submit Answers"
                            }
                        }
                    }
                }
                None => rsx! {
                    p { "No quiz loaded." }
                },
            }
        }
        QuizPhase::Results => {
            let report = vm.read().report().cloned();
            match report {
                Some(report) => {
                    let title = if report.perfect {
                        "🌟 Perfect Score! 🌟".to_string()
                    } else {
                        format!("{}/{} Correct", report.correct, report.total)
                    };
                    let review_cards = report.reviews.iter().enumerate().map(|(index, review)| {
                        let marker = if review.is_correct { "✅" } else { "❌" };
                        rsx! {
                            div {
                                key: "{index}",
                                class: if review.is_correct { "quiz-review correct" } else { "quiz-review incorrect" },
                                div { class: "question-text", "{review.question}" }
                                p { class: "review-your", "{marker} Your answer: {review.your_answer}" }
                                if !review.is_correct {
                                    p { class: "review-correct", "✓ Correct: {review.correct_answer}" }
                                }
                                if !review.explanation.is_empty() {
                                    p { class: "review-explanation", "💡 {review.explanation}" }
                                }
                            }
                        }
                    });
                    rsx! {
                        div { class: "quiz-results",
                            div { class: "result-card",
                                div { class: "result-title", "{title}" }
                                div { class: "result-xp", "+{report.xp_earned} XP" }
                                if report.bonus_xp > 0 {
                                    p { class: "result-bonus", "Bonus: +{report.bonus_xp} XP" }
                                }
                                p { class: "result-percentage", "You scored {report.percentage}%" }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: on_reset,
                                    "🔄 Try Another Quiz"
                                }
                            }
                            h4 { class: "review-heading", "📋 Review Answers" }
                            {review_cards}
                        }
                    }
                }
                None => rsx! {
                    p { "No results available." }
                },
            }
        }
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "📚 Document Quest" }
                p { class: "view-subtitle", "Turn any text into a quiz and earn XP." }
            }
            if let Some(notice) = notice {
                p { class: "notice", "{notice}" }
            }
            {body}
        }
    }
}
