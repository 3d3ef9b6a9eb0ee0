// Cross-platform helpers (native tokio / browser event loop)
pub mod runtime;

pub use runtime::{sleep, spawn_detached};
