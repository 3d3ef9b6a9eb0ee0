use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::pages::routes::Route;
use crate::shared::hooks::{use_services, use_session};

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let session = use_session();

    let projects = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move { services.reporting(services.projects().list().await) }
        }
    });

    let greeting = session
        .user
        .as_ref()
        .map(|user| format!("Hello, {}", user.display_name()))
        .unwrap_or_else(|| "Hello".to_string());
    let role = session.user.as_ref().map(|user| user.role_label().to_string()).unwrap_or_default();

    rsx! {
        section { class: "c-dashboard",
            header { class: "c-dashboard__header",
                h1 { "{greeting}" }
                if !role.is_empty() {
                    span { class: "c-badge", "{role}" }
                }
            }
            match &*projects.read() {
                None => rsx! { LoadingText { message: "Loading projects…".to_string() } },
                Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
                Some(Ok(list)) => rsx! {
                    div { class: "c-stat",
                        span { class: "c-stat__value", "{list.len()}" }
                        span { class: "c-stat__label", "projects" }
                    }
                    Link { class: "c-button", to: Route::Projects {}, "Manage projects" }
                },
            }
        }
    }
}
