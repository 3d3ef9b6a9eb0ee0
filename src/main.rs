//! JAPM Console - Main Entry Point
//!
//! Serves the Dioxus application together with the local health endpoint.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use japm_console::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use japm_console::config::AppConfig;
    use japm_console::handlers::{health_routes, LocalHealthState};

    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::load();
    tracing::info!(
        api_url = %config.api_base_url,
        environment = %config.environment,
        custom_key = config.custom_key.is_some(),
        "Starting JAPM console..."
    );

    dioxus::serve(move || {
        let health = LocalHealthState::from_config(&config);
        async move {
            let router = dioxus::server::router(App).merge(health_routes(health));
            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] JAPM console initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
