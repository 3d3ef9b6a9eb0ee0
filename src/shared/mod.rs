pub mod errors;
pub mod logging;
pub mod notifications;
pub mod services;
pub mod utils;

// Dioxus hooks over the app context
pub mod hooks;
