pub mod common;
pub mod error_fallback;
pub mod health_gate;
pub mod toaster;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use error_fallback::ErrorFallback;
pub use health_gate::HealthGate;
pub use toaster::{ChannelNotifier, Toaster};
