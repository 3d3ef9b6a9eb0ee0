pub mod components;
pub mod context;
pub mod pages;

pub use context::AppServices;
pub use pages::routes::{App, Route};
