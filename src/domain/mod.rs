// Backend DTOs and the framework-agnostic controllers built on them
pub mod models;
pub mod services;
