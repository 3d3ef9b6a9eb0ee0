//! The single outbound HTTP pipeline
//!
//! Every backend call goes through [`HttpClient`]: it resolves the URL,
//! attaches the bearer token when one is stored, decodes JSON on success and
//! normalizes every failure into an [`ApiError`]. It never retries and never
//! swallows an error.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, Method, RawResponse, Transport};
use crate::infrastructure::token_store::TokenStore;
use crate::shared::errors::ApiError;
use crate::shared::logging;

/// Header carrying the configured custom key
pub const CUSTOM_KEY_HEADER: &str = "X-Custom-Key";

#[derive(Clone)]
pub struct HttpClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    custom_key: Option<Arc<str>>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("custom_key", &self.custom_key.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            transport,
            tokens,
            custom_key: None,
        }
    }

    /// Send `key` with every request; empty keys are ignored
    pub fn with_custom_key(mut self, key: Option<String>) -> Self {
        self.custom_key = key.filter(|k| !k.is_empty()).map(Into::into);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store the client reads on every request
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::Patch, path, Some(body)).await
    }

    /// DELETE, ignoring whatever body the backend returns
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode { message: e.to_string() })?;

        let response = self.send(method, path, body).await?;
        decode_body(&response.body)
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<RawResponse, ApiError> {
        let request = self.build_request(method, path, body);
        logging::log_request(method.as_str(), path, request.header("Authorization").is_some());

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                logging::log_network_failure(method.as_str(), path, &e.message());
                return Err(e);
            }
        };

        if !response.is_success() {
            let error = ApiError::from_response(response.status, &response.body);
            logging::log_request_failure(method.as_str(), path, response.status, &error.message());
            return Err(error);
        }

        Ok(response)
    }

    /// Resolve the URL and attach headers
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(key) = &self.custom_key {
            headers.push((CUSTOM_KEY_HEADER.to_string(), key.to_string()));
        }
        if let Some(token) = self.tokens.get_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        ApiRequest {
            method,
            url: format!("{}/{}", self.base_url, path.trim_start_matches('/')),
            headers,
            body,
        }
    }
}

/// Decode a 2xx body; an empty body reads as JSON `null`
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode { message: e.to_string() })
}

/// Join path segments, percent-encoding each one
pub fn api_path(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::testing::RecordingTransport;
    use crate::infrastructure::token_store::MemoryTokenStore;
    use serde_json::{Value, json};

    fn client(transport: &RecordingTransport, tokens: &MemoryTokenStore) -> HttpClient {
        HttpClient::new(
            "http://backend.test/",
            Arc::new(transport.clone()),
            Arc::new(tokens.clone()),
        )
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_present() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"[]"#);
        let tokens = MemoryTokenStore::with_token("secret-token");

        let _: Vec<Value> = client(&transport, &tokens).get("/projects").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://backend.test/projects");
        assert_eq!(sent[0].header("authorization"), Some("Bearer secret-token"));
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"ok":true}"#);
        let tokens = MemoryTokenStore::new();

        let _: Value = client(&transport, &tokens).get("projects").await.unwrap();

        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_token_is_read_on_every_request() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        transport.respond(200, "{}");
        let tokens = MemoryTokenStore::new();
        let client = client(&transport, &tokens);

        let _: Value = client.get("/a").await.unwrap();
        tokens.set_token("late");
        let _: Value = client.get("/b").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(sent[1].header("Authorization"), Some("Bearer late"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport = RecordingTransport::new();
        transport.respond(201, r#"{"id":"p1","name":"Demo"}"#);
        let tokens = MemoryTokenStore::new();

        let created: Value = client(&transport, &tokens)
            .post("/projects", &json!({"name": "Demo"}))
            .await
            .unwrap();

        assert_eq!(created["id"], "p1");
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.body.as_deref(), Some(r#"{"name":"Demo"}"#));
    }

    #[tokio::test]
    async fn test_unauthorized_is_surfaced_not_swallowed() {
        let transport = RecordingTransport::new();
        transport.respond(401, r#"{"statusCode":401,"message":"Unauthorized"}"#);
        let tokens = MemoryTokenStore::with_token("expired");

        let err = client(&transport, &tokens).get::<Value>("/auth/profile").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Unauthorized");
        // The client does not clear the session itself
        assert_eq!(tokens.get_token().as_deref(), Some("expired"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_is_not_retried() {
        let transport = RecordingTransport::new();
        transport.fail("connection refused");
        let tokens = MemoryTokenStore::new();

        let err = client(&transport, &tokens).get::<Value>("/health").await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_success_body_and_delete() {
        let transport = RecordingTransport::new();
        transport.respond(204, "");
        transport.respond(200, r#"{"deleted":true}"#);
        let tokens = MemoryTokenStore::new();
        let client = client(&transport, &tokens);

        let nothing: Option<Value> = client.get("/maybe").await.unwrap();
        assert!(nothing.is_none());
        client.delete("/projects/p1").await.unwrap();
        assert_eq!(transport.requests()[1].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_mismatched_body_is_decode_error() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"not":"a list"}"#);
        let tokens = MemoryTokenStore::new();

        let err = client(&transport, &tokens).get::<Vec<Value>>("/projects").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unencodable_body_is_not_sent() {
        let transport = RecordingTransport::new();
        let tokens = MemoryTokenStore::new();
        // JSON object keys must be strings
        let body: std::collections::HashMap<(u8, u8), &str> = [((1, 2), "x")].into_iter().collect();

        let err = client(&transport, &tokens).post::<_, Value>("/projects", &body).await.unwrap_err();

        assert!(matches!(err, ApiError::Encode { .. }));
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Failed to encode request body"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_custom_key_header_when_configured() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        transport.respond(200, "{}");
        let tokens = MemoryTokenStore::new();

        let keyed = client(&transport, &tokens).with_custom_key(Some("k-123".to_string()));
        let _: Value = keyed.get("/projects").await.unwrap();
        let blank = client(&transport, &tokens).with_custom_key(Some(String::new()));
        let _: Value = blank.get("/projects").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header(CUSTOM_KEY_HEADER), Some("k-123"));
        assert_eq!(sent[1].header(CUSTOM_KEY_HEADER), None);
    }

    #[test]
    fn test_api_path_encodes_segments() {
        assert_eq!(api_path(&["projects", "p1", "prompts"]), "/projects/p1/prompts");
        assert_eq!(api_path(&["regions", "es/MX"]), "/regions/es%2FMX");
        assert_eq!(api_path(&["versions", "1.0.0 beta"]), "/versions/1.0.0%20beta");
    }
}
