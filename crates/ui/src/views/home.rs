use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.question_bank().len();
    let secs = ctx.settings().question_secs();

    rsx! {
        section { class: "trivia__card",
            div { class: "trivia__card-wrap",
                h1 { class: "trivia__question", "Ready to play?" }
                hr {}
                ul { class: "trivia__card-information--sections",
                    li { "{count} questions, in a new order every game." }
                    li { "You have {secs} seconds to answer each one." }
                }
                hr {}
                Link { class: "trivia__start", to: Route::Play {}, "Start" }
            }
        }
    }
}
