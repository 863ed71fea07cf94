use dioxus::prelude::*;

use crate::route_table::path_from_segments;
use crate::routes::Route;

/// Paths outside every namespace land here.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = path_from_segments(&route);
    tracing::debug!(%path, "no namespace matched");

    rsx! {
        document::Title { "Page not found" }
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page not found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Root {},
                    class: "not-found-link",
                    "Back to PubCash"
                }
            }
        }
    }
}
