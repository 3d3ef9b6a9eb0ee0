use dioxus::prelude::*;

use crate::app::pages::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "c-not-found",
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { class: "c-button", to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
