pub mod dashboard;
pub mod not_found;
pub mod projects;
pub mod register;
pub mod routes;
pub mod sign_in;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use projects::Projects;
pub use register::Register;
pub use routes::{App, Route};
pub use sign_in::SignIn;
