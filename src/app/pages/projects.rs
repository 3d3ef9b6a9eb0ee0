//! Project list with create and delete

use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::domain::models::{CreateProject, Project};
use crate::shared::hooks::use_services;

#[component]
pub fn Projects() -> Element {
    let services = use_services();

    let mut projects = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move { services.reporting(services.projects().list().await) }
        }
    });

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let create = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let trimmed = name().trim().to_string();
            if trimmed.is_empty() || saving() {
                return;
            }
            saving.set(true);

            let services = services.clone();
            let dto = CreateProject {
                id: None,
                name: trimmed,
                description: Some(description().trim().to_string()).filter(|d| !d.is_empty()),
            };
            spawn(async move {
                match services.projects().create(&dto).await {
                    Ok(project) => {
                        services.notifications.success(format!("Project \"{}\" created", project.name));
                        name.set(String::new());
                        description.set(String::new());
                        projects.restart();
                    }
                    Err(e) => services.report_error(&e),
                }
                saving.set(false);
            });
        }
    };

    let remove = use_callback(move |project: Project| {
        let services = services.clone();
        spawn(async move {
            match services.projects().delete(&project.id).await {
                Ok(()) => {
                    services.notifications.success(format!("Project \"{}\" deleted", project.name));
                    projects.restart();
                }
                Err(e) => services.report_error(&e),
            }
        });
    });

    rsx! {
        section { class: "c-projects",
            h1 { "Projects" }

            form { class: "c-form c-form--inline", onsubmit: create,
                input {
                    class: "c-form__input",
                    placeholder: "Project name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "c-form__input",
                    placeholder: "Description (optional)",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Create"
                }
            }

            match &*projects.read() {
                None => rsx! { LoadingText { message: "Loading projects…".to_string() } },
                Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No projects yet. Create the first one above.".to_string() }
                },
                Some(Ok(list)) => rsx! {
                    ul { class: "c-project-list",
                        for project in list.clone() {
                            ProjectRow { key: "{project.id}", project: project.clone(), on_delete: remove }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_delete: EventHandler<Project>) -> Element {
    let mut confirming = use_signal(|| false);
    let description = project.description.clone().unwrap_or_default();
    let doomed = project.clone();

    rsx! {
        li { class: "c-project-row",
            div { class: "c-project-row__info",
                strong { "{project.name}" }
                if !description.is_empty() {
                    span { class: "c-project-row__description", "{description}" }
                }
            }
            if confirming() {
                button {
                    class: "c-button c-button--danger",
                    onclick: move |_| {
                        confirming.set(false);
                        on_delete.call(doomed.clone());
                    },
                    "Confirm delete"
                }
                button { class: "c-button c-button--ghost", onclick: move |_| confirming.set(false), "Cancel" }
            } else {
                button { class: "c-button c-button--ghost", onclick: move |_| confirming.set(true), "Delete" }
            }
        }
    }
}
