//! Auth session controller
//!
//! Owns the signed-in user. State is derived from the token store plus a
//! profile fetch:
//!
//! ```text
//! Checking ──restore()──▶ Authenticated
//!     │                        │ logout() / 401
//!     └──no token / failure──▶ Unauthenticated ◀┘
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use futures::channel::mpsc::UnboundedSender;

use crate::domain::models::{LoginRequest, RegisterRequest, User, UserProfile};
use crate::infrastructure::TokenStore;
use crate::shared::errors::ApiError;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::AuthService;

/// Where `logout()` sends the user
pub const SIGN_IN_ROUTE: &str = "/auth/login";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Checking => "checking",
            SessionStatus::Authenticated => "authenticated",
            SessionStatus::Unauthenticated => "unauthenticated",
        }
    }
}

/// Point-in-time copy of the session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            status: SessionStatus::Checking,
            user: None,
            error: None,
        }
    }
}

/// Route guard decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    /// Session still being verified; render a placeholder
    Wait,
    RedirectToSignIn,
}

impl SessionSnapshot {
    pub fn route_access(&self, protected: bool) -> RouteAccess {
        match (self.status, protected) {
            (_, false) => RouteAccess::Allow,
            (SessionStatus::Checking, true) => RouteAccess::Wait,
            (SessionStatus::Authenticated, true) => RouteAccess::Allow,
            (SessionStatus::Unauthenticated, true) => RouteAccess::RedirectToSignIn,
        }
    }
}

/// Performs navigation on behalf of the controller
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Full-page navigation through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                tracing::warn!(path = path, "Navigation failed");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn navigate(&self, path: &str) {
        tracing::debug!(path = path, "Navigation requested outside a browser");
    }
}

#[derive(Clone)]
pub struct AuthSession {
    auth: AuthService,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    state: Arc<RwLock<SessionSnapshot>>,
    listener: Arc<RwLock<Option<UnboundedSender<SessionSnapshot>>>>,
}

impl AuthSession {
    pub fn new(auth: AuthService, tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            auth,
            tokens,
            navigator,
            state: Arc::new(RwLock::new(SessionSnapshot::default())),
            listener: Arc::new(RwLock::new(None)),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.read().unwrap_or_else(PoisonError::into_inner).status
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).user.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).error.clone()
    }

    /// Receive a snapshot after every change
    pub fn set_listener(&self, listener: UnboundedSender<SessionSnapshot>) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn route_access(&self, protected: bool) -> RouteAccess {
        self.snapshot().route_access(protected)
    }

    /// Verify the stored token by fetching the profile
    pub async fn restore(&self) -> SessionStatus {
        if self.tokens.get_token().is_none() {
            self.transition(LogOperation::SessionRestore, SessionStatus::Unauthenticated, None, None);
            return SessionStatus::Unauthenticated;
        }

        match self.load_profile().await {
            Ok(_) => SessionStatus::Authenticated,
            Err(_) => SessionStatus::Unauthenticated,
        }
    }

    /// Exchange credentials for a token, then load the profile
    pub async fn login(&self, credentials: &LoginRequest) -> Result<UserProfile, ApiError> {
        self.set_error(None);
        tracing::info!(operation = LogOperation::Login.as_str(), email = %credentials.email, "Signing in");

        let response = match self.auth.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                let message = login_error_message(&e);
                self.transition(
                    LogOperation::Login,
                    SessionStatus::Unauthenticated,
                    None,
                    Some(message),
                );
                return Err(e);
            }
        };

        self.tokens.set_token(&response.access_token);

        self.load_profile().await.inspect_err(|e| {
            self.set_error(Some(e.user_message()));
        })
    }

    /// Fetch the profile for the stored token. On failure the token is
    /// discarded and the backend's error is returned as-is.
    async fn load_profile(&self) -> Result<UserProfile, ApiError> {
        self.transition(LogOperation::SessionRestore, SessionStatus::Checking, None, None);

        match self.auth.profile().await {
            Ok(profile) => {
                self.transition(
                    LogOperation::SessionRestore,
                    SessionStatus::Authenticated,
                    Some(profile.clone()),
                    None,
                );
                Ok(profile)
            }
            Err(e) => {
                tracing::warn!(
                    operation = LogOperation::SessionRestore.as_str(),
                    error = %e,
                    "Profile fetch failed, discarding token"
                );
                self.tokens.clear_token();
                self.transition(LogOperation::SessionRestore, SessionStatus::Unauthenticated, None, None);
                Err(e)
            }
        }
    }

    /// Drop the session and go back to the sign-in page
    pub fn logout(&self) {
        self.tokens.clear_token();
        self.transition(LogOperation::Logout, SessionStatus::Unauthenticated, None, None);
        self.navigator.navigate(SIGN_IN_ROUTE);
    }

    /// Create an account; does not sign in
    pub async fn register(&self, dto: &RegisterRequest) -> Result<User, ApiError> {
        self.auth.register(dto).await
    }

    /// React to an error seen anywhere in the app: a 401 ends the session.
    /// Returns whether the session was ended.
    pub fn observe_error(&self, error: &ApiError) -> bool {
        if error.is_unauthorized() && self.status() != SessionStatus::Unauthenticated {
            self.logout();
            return true;
        }
        false
    }

    fn set_error(&self, error: Option<String>) {
        let snapshot = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.error = error;
            state.clone()
        };
        self.publish(snapshot);
    }

    fn publish(&self, snapshot: SessionSnapshot) {
        let mut listener = self.listener.write().unwrap_or_else(PoisonError::into_inner);
        let closed = listener
            .as_ref()
            .is_some_and(|tx| tx.unbounded_send(snapshot).is_err());
        if closed {
            *listener = None;
        }
    }

    fn transition(
        &self,
        operation: LogOperation,
        status: SessionStatus,
        user: Option<UserProfile>,
        error: Option<String>,
    ) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let from = state.status;
        *state = SessionSnapshot { status, user, error };
        let snapshot = state.clone();
        drop(state);

        self.publish(snapshot);

        if from != status {
            logging::log_session_transition(operation, from.as_str(), status.as_str());
        }
    }
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network { .. } => error.user_message(),
        ApiError::Http { status: 401, .. } => INVALID_CREDENTIALS.to_string(),
        _ => {
            let message = error.message();
            if message.is_empty() { INVALID_CREDENTIALS.to_string() } else { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::testing::RecordingTransport;
    use crate::infrastructure::{HttpClient, MemoryTokenStore};
    use std::sync::Mutex;

    const PROFILE: &str = r#"{"id":"u1","email":"ana@japm.app","name":"Ana","role":"admin","tenantId":"t1"}"#;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.lock().unwrap().push(path.to_string());
        }
    }

    struct Harness {
        session: AuthSession,
        transport: RecordingTransport,
        tokens: MemoryTokenStore,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness(tokens: MemoryTokenStore) -> Harness {
        let transport = RecordingTransport::new();
        let navigator = Arc::new(RecordingNavigator::default());
        let client = HttpClient::new(
            "http://backend.test",
            Arc::new(transport.clone()),
            Arc::new(tokens.clone()),
        );
        let session = AuthSession::new(AuthService::new(client), Arc::new(tokens.clone()), navigator.clone());
        Harness { session, transport, tokens, navigator }
    }

    #[tokio::test]
    async fn test_starts_in_checking() {
        let h = harness(MemoryTokenStore::new());
        assert_eq!(h.session.status(), SessionStatus::Checking);
        assert_eq!(h.session.route_access(true), RouteAccess::Wait);
    }

    #[tokio::test]
    async fn test_restore_without_token_skips_profile_fetch() {
        let h = harness(MemoryTokenStore::new());

        assert_eq!(h.session.restore().await, SessionStatus::Unauthenticated);
        assert_eq!(h.transport.call_count(), 0);
        assert_eq!(h.session.route_access(true), RouteAccess::RedirectToSignIn);
        assert_eq!(h.session.route_access(false), RouteAccess::Allow);
    }

    #[tokio::test]
    async fn test_restore_with_valid_token_loads_profile() {
        let h = harness(MemoryTokenStore::with_token("good"));
        h.transport.respond(200, PROFILE);

        assert_eq!(h.session.restore().await, SessionStatus::Authenticated);
        let user = h.session.user().unwrap();
        assert_eq!(user.email, "ana@japm.app");
        assert_eq!(user.tenant_id.as_deref(), Some("t1"));
        assert_eq!(h.transport.requests()[0].header("Authorization"), Some("Bearer good"));
    }

    #[tokio::test]
    async fn test_restore_failure_clears_token() {
        let h = harness(MemoryTokenStore::with_token("stale"));
        h.transport.respond(401, r#"{"message":"Unauthorized"}"#);

        assert_eq!(h.session.restore().await, SessionStatus::Unauthenticated);
        assert_eq!(h.tokens.get_token(), None);
        assert!(h.session.user().is_none());
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let h = harness(MemoryTokenStore::new());
        h.transport.respond(201, r#"{"access_token":"fresh"}"#);
        h.transport.respond(200, PROFILE);

        let user = h
            .session
            .login(&LoginRequest::new("ana@japm.app", "s3cret"))
            .await
            .unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(h.tokens.get_token().as_deref(), Some("fresh"));
        assert_eq!(h.session.status(), SessionStatus::Authenticated);
        assert_eq!(h.session.snapshot().user, Some(user));

        let sent = h.transport.requests();
        assert!(sent[0].url.ends_with("/auth/login"));
        assert_eq!(sent[1].header("Authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn test_login_with_invalid_credentials() {
        let h = harness(MemoryTokenStore::new());
        h.session.restore().await;
        h.transport.respond(401, r#"{"statusCode":401,"message":"Unauthorized"}"#);

        let err = h
            .session
            .login(&LoginRequest::new("ana@japm.app", "wrong"))
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(h.tokens.get_token(), None);
        assert_eq!(h.session.status(), SessionStatus::Unauthenticated);
        assert_eq!(h.session.error().as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_login_surfaces_profile_failure() {
        let h = harness(MemoryTokenStore::new());
        h.transport.respond(201, r#"{"access_token":"fresh"}"#);
        h.transport.respond(503, r#"{"statusCode":503,"message":"Profile service down"}"#);

        let err = h
            .session
            .login(&LoginRequest::new("ana@japm.app", "s3cret"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), "Profile service down");
        assert_eq!(h.tokens.get_token(), None);
        assert_eq!(h.session.status(), SessionStatus::Unauthenticated);
        assert_eq!(h.session.error().as_deref(), Some("Profile service down"));
    }

    #[tokio::test]
    async fn test_logout_clears_everything_and_navigates() {
        let h = harness(MemoryTokenStore::with_token("good"));
        h.transport.respond(200, PROFILE);
        h.session.restore().await;

        h.session.logout();

        assert_eq!(h.tokens.get_token(), None);
        assert_eq!(h.session.status(), SessionStatus::Unauthenticated);
        assert!(h.session.user().is_none());
        assert_eq!(*h.navigator.visited.lock().unwrap(), vec![SIGN_IN_ROUTE.to_string()]);
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let h = harness(MemoryTokenStore::new());
        h.session.restore().await;
        h.transport.respond(201, PROFILE);

        let user = h
            .session
            .register(&RegisterRequest {
                name: "Ana".to_string(),
                email: "ana@japm.app".to_string(),
                password: "s3cret".to_string(),
                tenant_id: None,
            })
            .await
            .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(h.session.status(), SessionStatus::Unauthenticated);
        assert_eq!(h.tokens.get_token(), None);
    }

    #[tokio::test]
    async fn test_listener_receives_snapshots() {
        use futures::StreamExt;

        let h = harness(MemoryTokenStore::with_token("good"));
        let (tx, mut rx) = futures::channel::mpsc::unbounded();
        h.session.set_listener(tx);
        h.transport.respond(200, PROFILE);

        h.session.restore().await;

        assert_eq!(rx.next().await.unwrap().status, SessionStatus::Checking);
        let last = rx.next().await.unwrap();
        assert_eq!(last.status, SessionStatus::Authenticated);
        assert_eq!(last.user.unwrap().id, "u1");
    }

    #[tokio::test]
    async fn test_observed_unauthorized_ends_session() {
        let h = harness(MemoryTokenStore::with_token("good"));
        h.transport.respond(200, PROFILE);
        h.session.restore().await;

        assert!(!h.session.observe_error(&ApiError::from_response(404, "")));
        assert!(h.session.is_authenticated());

        assert!(h.session.observe_error(&ApiError::from_response(401, "")));
        assert_eq!(h.session.status(), SessionStatus::Unauthenticated);
        assert_eq!(h.tokens.get_token(), None);
    }
}
