//! Structured logging helpers for the console
//!
//! Every event carries an `operation` field so that client, session and
//! health traces can be filtered the same way on the server and in the
//! browser console.

/// Operations that produce log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ApiRequest,
    SessionRestore,
    Login,
    Logout,
    HealthProbe,
    Notification,
    LocalHealth,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ApiRequest => "api_request",
            LogOperation::SessionRestore => "session_restore",
            LogOperation::Login => "login",
            LogOperation::Logout => "logout",
            LogOperation::HealthProbe => "health_probe",
            LogOperation::Notification => "notification",
            LogOperation::LocalHealth => "local_health",
        }
    }
}

/// Log an outbound request
pub fn log_request(method: &str, path: &str, authenticated: bool) {
    tracing::debug!(
        operation = LogOperation::ApiRequest.as_str(),
        method = method,
        path = path,
        authenticated = authenticated,
        "Sending API request"
    );
}

/// Log a non-2xx response
pub fn log_request_failure(method: &str, path: &str, status: u16, message: &str) {
    if status == 401 {
        tracing::warn!(
            operation = LogOperation::ApiRequest.as_str(),
            method = method,
            path = path,
            status = status,
            "Request rejected as unauthorized"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::ApiRequest.as_str(),
            method = method,
            path = path,
            status = status,
            error = message,
            "API request failed"
        );
    }
}

/// Log a transport failure (no response)
pub fn log_network_failure(method: &str, path: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ApiRequest.as_str(),
        method = method,
        path = path,
        error = error,
        "No response from backend"
    );
}

/// Log a session state change
pub fn log_session_transition(operation: LogOperation, from: &str, to: &str) {
    tracing::info!(
        operation = operation.as_str(),
        from = from,
        to = to,
        "Session state changed"
    );
}

/// Log the outcome of a health probe
pub fn log_health_probe(healthy: bool, reason: Option<&str>) {
    if healthy {
        tracing::debug!(
            operation = LogOperation::HealthProbe.as_str(),
            healthy = true,
            "Backend healthy"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::HealthProbe.as_str(),
            healthy = false,
            reason = reason.unwrap_or("unknown"),
            "Backend unhealthy"
        );
    }
}

/// Log a notification dropped by deduplication
pub fn log_notification_suppressed(message: &str) {
    tracing::trace!(
        operation = LogOperation::Notification.as_str(),
        message = message,
        "Duplicate notification suppressed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ApiRequest.as_str(), "api_request");
        assert_eq!(LogOperation::SessionRestore.as_str(), "session_restore");
        assert_eq!(LogOperation::Login.as_str(), "login");
        assert_eq!(LogOperation::Logout.as_str(), "logout");
        assert_eq!(LogOperation::HealthProbe.as_str(), "health_probe");
        assert_eq!(LogOperation::Notification.as_str(), "notification");
        assert_eq!(LogOperation::LocalHealth.as_str(), "local_health");
    }
}
