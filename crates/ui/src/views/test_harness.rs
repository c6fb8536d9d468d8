use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, QuestionBank};
use trivia_core::model::{GameSettings, QuestionDraft};
use trivia_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{GameView, HomeView};

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    settings: GameSettings,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn settings(&self) -> GameSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Game,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Game => rsx! { GameView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A one-question bank, so the first screen is predictable.
pub fn single_question_bank() -> QuestionBank {
    QuestionBank::from_drafts(vec![QuestionDraft::new(
        "Which planet is known as the Red Planet?",
        ["Venus", "Mars", "Jupiter"],
        "Mars",
    )])
    .expect("valid bank")
}

pub fn setup_view_harness(view: ViewKind, bank: QuestionBank, settings: GameSettings) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(bank),
        settings,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
