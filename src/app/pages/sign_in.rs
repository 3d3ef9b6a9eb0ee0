use dioxus::prelude::*;

use crate::app::components::ErrorMessage;
use crate::app::pages::routes::Route;
use crate::domain::models::LoginRequest;
use crate::shared::hooks::{use_services, use_session};

#[component]
pub fn SignIn() -> Element {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        let services = services.clone();
        let credentials = LoginRequest::new(email().trim(), password());
        spawn(async move {
            match services.session.login(&credentials).await {
                Ok(user) => {
                    services.notifications.success(format!("Welcome back, {}", user.display_name()));
                    navigator.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Sign-in rejected");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "c-auth",
            h1 { class: "c-auth__title", "Sign in to JAPM" }
            if let Some(error) = session.error.clone() {
                ErrorMessage { message: error }
            }
            form { class: "c-form", onsubmit: onsubmit,
                label { class: "c-form__label", r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "c-form__input",
                    r#type: "email",
                    required: true,
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "c-form__label", r#for: "password", "Password" }
                input {
                    id: "password",
                    class: "c-form__input",
                    r#type: "password",
                    required: true,
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in…" } else { "Sign in" }
                }
            }
            p { class: "c-auth__footer",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
