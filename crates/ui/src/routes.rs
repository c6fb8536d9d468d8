use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GameView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play", GameView)] Play {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "trivia",
            header { class: "trivia__header",
                h1 { Link { to: Route::Home {}, "Trivia" } }
            }
            main { class: "trivia__game",
                Outlet::<Route> {}
            }
        }
    }
}
