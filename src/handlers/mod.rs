/// Local health check for deployments
pub mod health;

pub use health::{health_handler, health_head_handler, health_routes, LocalHealthState, MemoryUsage};
