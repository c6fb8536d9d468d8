use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

/// Desktop root: stylesheet, window title and the routed pages.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Trivia" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                section { class: "trivia__card fatal",
                    div { class: "trivia__card-wrap",
                        h1 { "The game stopped unexpectedly" }
                        pre { "{errors:?}" }
                    }
                }
            },
            Router::<Route> {}
        }
    }
}
