// Custom Dioxus hooks
pub mod use_services;
pub mod use_session;

pub use use_services::use_services;
pub use use_session::{use_session, use_session_listener, SessionSignal};
