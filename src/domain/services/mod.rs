// Session and health controllers
// No UI types here: the app subscribes to them, they never call into the UI

pub mod auth_session;
pub mod health_monitor;

pub use auth_session::{
    AuthSession, BrowserNavigator, Navigator, RouteAccess, SessionSnapshot, SessionStatus, SIGN_IN_ROUTE,
};
pub use health_monitor::{HealthMonitor, HealthState, ProbeOutcome, HEALTH_PATH};
