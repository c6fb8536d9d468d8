use dioxus::prelude::*;
use services::{FeedbackKind, QuestionBank};
use trivia_core::model::GameSettings;

use super::game::{FeedbackCard, QuestionCard, SummaryCard};
use super::test_harness::{ViewKind, drive_dom, setup_view_harness, single_question_bank};

fn render_component(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_start_link() {
    let mut harness = setup_view_harness(
        ViewKind::Home,
        QuestionBank::builtin(),
        GameSettings::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start"), "missing start link in {html}");
    assert!(html.contains("5 questions"), "missing count in {html}");
    assert!(html.contains("15 seconds"), "missing timing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Game,
        single_question_bank(),
        GameSettings::default(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Which planet is known as the Red Planet?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Question 1 of 1"), "missing progress in {html}");
    assert!(html.contains(">15<"), "missing countdown in {html}");
    assert!(!html.contains("countdown danger"), "early warning in {html}");
    for choice in ["Venus", "Mars", "Jupiter"] {
        assert!(html.contains(choice), "missing {choice} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_warns_on_short_timers() {
    let settings = GameSettings::new(8, 10).unwrap();
    let mut harness = setup_view_harness(ViewKind::Game, single_question_bank(), settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("countdown danger"), "missing warning in {html}");
    assert!(html.contains(">8<"), "missing countdown in {html}");
}

#[component]
fn TimedOutCard() -> Element {
    rsx! {
        FeedbackCard { kind: FeedbackKind::TimedOut, correct_answer: "Mexico".to_string() }
    }
}

#[component]
fn CorrectCard() -> Element {
    rsx! {
        FeedbackCard { kind: FeedbackKind::Correct, correct_answer: "Mexico".to_string() }
    }
}

#[component]
fn FinalCard() -> Element {
    rsx! {
        SummaryCard { correct: 3, incorrect: 2, on_restart: move |()| {} }
    }
}

#[component]
fn LastSecondsCard() -> Element {
    rsx! {
        QuestionCard {
            prompt: "Pick one".to_string(),
            choices: vec!["A".to_string(), "B".to_string()],
            seconds_left: Some(3),
            progress: String::new(),
            on_select: move |_: String| {},
        }
    }
}

#[test]
fn feedback_card_reveals_answer_only_when_wrong() {
    let html = render_component(TimedOutCard);
    assert!(html.contains("Time"), "missing headline in {html}");
    assert!(html.contains("Mexico"), "missing answer in {html}");

    let html = render_component(CorrectCard);
    assert!(html.contains("Congratulations!"), "missing headline in {html}");
    assert!(!html.contains("Mexico"), "answer leaked in {html}");
}

#[test]
fn summary_card_lists_both_counts() {
    let html = render_component(FinalCard);
    assert!(html.contains("3 Questions answered correctly."), "{html}");
    assert!(html.contains("2 Questions answered incorrectly."), "{html}");
    assert!(html.contains("Play again"), "missing restart in {html}");
}

#[test]
fn question_card_hides_empty_progress() {
    let html = render_component(LastSecondsCard);
    assert!(!html.contains("trivia__progress"), "{html}");
    assert!(html.contains("countdown danger"), "{html}");
}
