use dioxus::prelude::*;
use services::FeedbackKind;

use crate::vm::{countdown_label, feedback_copy, is_danger, summary_lines};

#[component]
pub(crate) fn QuestionCard(
    prompt: String,
    choices: Vec<String>,
    #[props(!optional)] seconds_left: Option<u32>,
    progress: String,
    on_select: EventHandler<String>,
) -> Element {
    let countdown_class = if is_danger(seconds_left) {
        "countdown danger"
    } else {
        "countdown"
    };
    let countdown = countdown_label(seconds_left);

    rsx! {
        section { class: "trivia__card",
            div { class: "trivia__card-wrap",
                if !progress.is_empty() {
                    p { class: "trivia__progress", "{progress}" }
                }
                h1 { class: "trivia__question", "{prompt}" }
                hr {}
                div { class: "trivia__card-information",
                    ul { class: "trivia__card-information--sections",
                        li { "Click to choose the correct answer." }
                        li {
                            "Time Remaining: "
                            span { class: "{countdown_class}", "{countdown}" }
                        }
                    }
                }
                hr {}
                div { class: "trivia__card-answers",
                    div { class: "trivia__card-choices",
                        {choices.iter().map(|choice| {
                            let value = choice.clone();
                            rsx! {
                                button {
                                    key: "{choice}",
                                    class: "trivia__card-answer",
                                    onclick: move |_| on_select.call(value.clone()),
                                    "{choice}"
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn FeedbackCard(kind: FeedbackKind, correct_answer: String) -> Element {
    let copy = feedback_copy(kind);
    let detail_class = if copy.show_answer {
        "trivia__wrong-answer"
    } else {
        "trivia__right-answer"
    };

    rsx! {
        section { class: "trivia__card",
            div { class: "trivia__card-wrap",
                h1 { class: "trivia__message", "{copy.headline}" }
                hr {}
                div { class: "{detail_class}",
                    p { "{copy.detail}" }
                    if copy.show_answer {
                        p {
                            "The correct answer to the question is: "
                            i { "{correct_answer}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn SummaryCard(correct: u32, incorrect: u32, on_restart: EventHandler<()>) -> Element {
    let [correct_line, incorrect_line] = summary_lines(correct, incorrect);

    rsx! {
        section { class: "trivia__card",
            div { class: "trivia__card-wrap",
                h1 { class: "trivia__game-over", "We have reached the end of the game!" }
                hr {}
                div { class: "trivia__message-details",
                    h2 { "Here's how you scored:" }
                    p { "{correct_line}" }
                    p { "{incorrect_line}" }
                }
                button {
                    class: "trivia__restart",
                    onclick: move |_| on_restart.call(()),
                    "Play again"
                }
            }
        }
    }
}
