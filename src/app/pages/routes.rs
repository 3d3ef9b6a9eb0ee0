use dioxus::prelude::*;

use crate::app::components::{ErrorFallback, HealthGate, LoadingText, Toaster};
use crate::app::context::AppServices;
use crate::app::pages::{Dashboard, NotFound, Projects, Register, SignIn};
use crate::config::AppConfig;
use crate::domain::services::RouteAccess;
use crate::shared::hooks::{use_services, use_session, use_session_listener};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[layout(ProtectedLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/projects")]
            Projects {},
        #[end_layout]

        #[route("/auth/login")]
        SignIn {},
        #[route("/auth/register")]
        Register {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| AppServices::from_config(AppConfig::load()));
    use_session_listener(services.session.clone());

    use_effect(|| {
        tracing::info!("JAPM console mounted");
    });

    rsx! {
        Toaster {}
        HealthGate {}
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    rsx! {
        div { class: "c-layout",
            nav { class: "c-navbar",
                Link { to: Route::Dashboard {}, class: "c-navbar__logo", "JAPM" }
                div { class: "c-navbar__actions",
                    if let Some(user) = session.user.clone() {
                        Link { to: Route::Projects {}, class: "c-navbar__link", "Projects" }
                        span { class: "c-navbar__user", "{user.display_name()}" }
                        button {
                            class: "c-button c-button--ghost",
                            onclick: move |_| services.session.logout(),
                            "Sign out"
                        }
                    }
                }
            }
            main { class: "c-layout__main",
                ErrorBoundary {
                    handle_error: move |errors: ErrorContext| rsx! {
                        ErrorFallback {
                            on_back: move |_| {
                                errors.clear_errors();
                                navigator.go_back();
                            }
                        }
                    },
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Renders its children only for a signed-in user
#[component]
fn ProtectedLayout() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let access = session.route_access(true);

    use_effect(use_reactive!(|access| {
        if access == RouteAccess::RedirectToSignIn {
            navigator.replace(Route::SignIn {});
        }
    }));

    match access {
        RouteAccess::Allow => rsx! { Outlet::<Route> {} },
        RouteAccess::Wait => rsx! { LoadingText { message: "Checking your session…".to_string() } },
        RouteAccess::RedirectToSignIn => rsx! {},
    }
}
