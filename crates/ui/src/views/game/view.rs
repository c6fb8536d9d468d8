use dioxus::prelude::*;
use services::TICK_INTERVAL;
use tracing::warn;

use super::cards::{FeedbackCard, QuestionCard, SummaryCard};
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{GameVm, Screen};

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut vm = use_signal(|| ctx.start_game());

    // One tick a second; the controller decides whether anything changed.
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            let now = clock.now();
            vm.with_mut(|state: &mut Result<GameVm, ViewError>| {
                if let Ok(game) = state {
                    game.tick(now);
                }
            });
        }
    });

    let on_select = use_callback(move |choice: String| {
        let now = clock.now();
        vm.with_mut(|state| {
            if let Ok(game) = state {
                game.select(&choice, now);
            }
        });
    });

    let on_restart = use_callback(move |()| {
        let now = clock.now();
        vm.with_mut(|state| {
            if let Ok(game) = state
                && let Err(err) = game.restart(now)
            {
                warn!(?err, "restart failed");
            }
        });
    });

    let view = vm.with(|state| {
        state
            .as_ref()
            .map(|game| (game.screen().clone(), game.progress_label()))
            .map_err(|err| *err)
    });

    match view {
        Err(err) => rsx! {
            p { class: "trivia__error", "{err.message()}" }
        },
        Ok((Screen::Idle, _)) => rsx! {},
        Ok((
            Screen::Question {
                prompt,
                choices,
                seconds_left,
            },
            progress,
        )) => rsx! {
            QuestionCard {
                prompt,
                choices,
                seconds_left,
                progress,
                on_select,
            }
        },
        Ok((
            Screen::Feedback {
                kind,
                correct_answer,
            },
            _,
        )) => rsx! {
            FeedbackCard { kind, correct_answer }
        },
        Ok((Screen::Summary { correct, incorrect }, _)) => rsx! {
            SummaryCard { correct, incorrect, on_restart }
        },
    }
}
