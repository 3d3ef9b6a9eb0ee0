use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::domain::models::RegisterRequest;
use crate::shared::hooks::use_services;

#[component]
pub fn Register() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
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
        let dto = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            tenant_id: None,
        };
        spawn(async move {
            match services.session.register(&dto).await {
                Ok(_) => {
                    services.notifications.success("Account created, you can now sign in");
                    navigator.push(Route::SignIn {});
                }
                Err(e) => services.report_error(&e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "c-auth",
            h1 { class: "c-auth__title", "Create your account" }
            form { class: "c-form", onsubmit: onsubmit,
                label { class: "c-form__label", r#for: "name", "Name" }
                input {
                    id: "name",
                    class: "c-form__input",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { class: "c-form__label", r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "c-form__input",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "c-form__label", r#for: "password", "Password" }
                input {
                    id: "password",
                    class: "c-form__input",
                    r#type: "password",
                    required: true,
                    autocomplete: "new-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "c-button c-button--primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "Create account"
                }
            }
            p { class: "c-auth__footer",
                "Already registered? "
                Link { to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}
