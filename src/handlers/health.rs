//! Local health endpoint
//!
//! `GET /api/health` reports the console server's own liveness for
//! deployment checks; it never calls the backend.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::AppConfig;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::LogOperation;

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    /// Resident set size, when the platform exposes it
    pub rss_bytes: Option<u64>,
}

type MemoryProbe = Arc<dyn Fn() -> Result<MemoryUsage> + Send + Sync>;

/// Shared state for the health routes
#[derive(Clone)]
pub struct LocalHealthState {
    environment: String,
    version: &'static str,
    memory: MemoryProbe,
}

impl LocalHealthState {
    pub fn new(environment: impl Into<String>) -> Self {
        Lazy::force(&PROCESS_START);
        Self {
            environment: environment.into(),
            version: env!("CARGO_PKG_VERSION"),
            memory: Arc::new(read_memory_usage),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.environment.clone())
    }

    /// Replace the memory probe
    pub fn with_memory_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> Result<MemoryUsage> + Send + Sync + 'static,
    {
        self.memory = Arc::new(probe);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub api: &'static str,
    pub memory: MemoryUsage,
}

#[derive(Debug, Serialize)]
pub struct HealthyResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the process started
    pub uptime: f64,
    pub environment: String,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct UnhealthyResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub error: String,
}

/// GET /api/health
pub async fn health_handler(Extension(state): Extension<LocalHealthState>) -> impl IntoResponse {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match (state.memory)() {
        Ok(memory) => (
            StatusCode::OK,
            Json(HealthyResponse {
                status: "healthy",
                timestamp,
                uptime: PROCESS_START.elapsed().as_secs_f64(),
                environment: state.environment.clone(),
                version: state.version,
                checks: HealthChecks { api: "ok", memory },
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                operation = LogOperation::LocalHealth.as_str(),
                error = %e,
                "Health check failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UnhealthyResponse {
                    status: "unhealthy",
                    timestamp,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// HEAD /api/health
pub async fn health_head_handler() -> StatusCode {
    StatusCode::OK
}

/// Router carrying both health routes and their state
pub fn health_routes(state: LocalHealthState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler).head(health_head_handler))
        .layer(Extension(state))
}

#[cfg(target_os = "linux")]
fn read_memory_usage() -> Result<MemoryUsage> {
    let status = std::fs::read_to_string("/proc/self/status")?;
    let rss_kib = status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.trim().trim_end_matches("kB").trim().parse::<u64>().ok())
        .ok_or_else(|| AppError::HealthCheck("VmRSS missing from /proc/self/status".to_string()))?;

    Ok(MemoryUsage {
        rss_bytes: Some(rss_kib * 1024),
    })
}

#[cfg(not(target_os = "linux"))]
fn read_memory_usage() -> Result<MemoryUsage> {
    Ok(MemoryUsage { rss_bytes: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn call(router: Router, method: Method) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let state = LocalHealthState::new("test").with_memory_probe(|| {
            Ok(MemoryUsage {
                rss_bytes: Some(42 * 1024),
            })
        });

        let (status, body) = call(health_routes(state), Method::GET).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["environment"], "test");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["checks"]["api"], "ok");
        assert_eq!(json["checks"]["memory"]["rssBytes"], 42 * 1024);
        assert!(json["uptime"].as_f64().unwrap() >= 0.0);
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_internal_failure_reports_unhealthy() {
        let state = LocalHealthState::new("test")
            .with_memory_probe(|| Err(AppError::HealthCheck("probe exploded".to_string())));

        let (status, body) = call(health_routes(state), Method::GET).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert!(json["error"].as_str().unwrap().contains("probe exploded"));
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_head_returns_empty_ok() {
        let (status, body) = call(health_routes(LocalHealthState::new("test")), Method::HEAD).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_default_memory_probe_succeeds() {
        let (status, _) = call(health_routes(LocalHealthState::new("test")), Method::GET).await;
        assert_eq!(status, StatusCode::OK);
    }
}
