use dioxus::prelude::*;

use super::common::ErrorMessage;

/// Replaces a page that failed to render
#[component]
pub fn ErrorFallback(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "c-error-fallback",
            h2 { class: "c-error-fallback__title", "Something went wrong" }
            ErrorMessage { message: "This page could not be displayed.".to_string() }
            div { class: "c-error-fallback__actions",
                button { class: "c-button", onclick: move |_| reload_page(), "Reload" }
                button { class: "c-button c-button--ghost", onclick: move |_| on_back.call(()), "Go back" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            tracing::warn!("Page reload failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn reload_page() {}
