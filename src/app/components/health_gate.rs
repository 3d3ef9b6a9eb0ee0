//! Blocking overlay shown while the backend is unhealthy

use dioxus::prelude::*;
use futures::StreamExt;

use crate::domain::services::HealthState;
use crate::shared::hooks::use_services;

#[component]
pub fn HealthGate() -> Element {
    let services = use_services();
    let mut state = use_signal(|| HealthState::Idle);

    let monitor = services.health.clone();
    use_effect(move || {
        let monitor = monitor.clone();
        spawn(async move {
            let (tx, mut rx) = futures::channel::mpsc::unbounded();
            monitor.set_listener(tx);
            monitor.start();
            while let Some(next) = rx.next().await {
                state.set(next);
            }
        });
    });

    let stopping = services.health.clone();
    use_drop(move || stopping.stop());

    let current = state();
    if !current.blocks_ui() {
        return rsx! {};
    }

    let retrying = matches!(current, HealthState::Probing { .. });
    let reason = match &current {
        HealthState::Unhealthy { reason } => reason.clone(),
        _ => String::new(),
    };
    let retry = move |_| {
        let monitor = services.health.clone();
        spawn(async move {
            monitor.retry().await;
        });
    };

    rsx! {
        div { class: "c-modal-backdrop",
            div { class: "c-modal", role: "alertdialog", aria_modal: "true",
                h2 { class: "c-modal__title", "Service unavailable" }
                p { class: "c-modal__text",
                    "The JAPM server is not responding. Your work is safe; try again in a moment."
                }
                if !reason.is_empty() {
                    p { class: "c-modal__detail", "{reason}" }
                }
                button {
                    class: "c-button c-button--primary",
                    disabled: retrying,
                    onclick: retry,
                    if retrying { "Checking…" } else { "Retry" }
                }
            }
        }
    }
}
