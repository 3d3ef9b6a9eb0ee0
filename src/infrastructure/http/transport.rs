//! Wire layer behind the HTTP client
//!
//! `reqwest` on native targets, `reqwasm` in the browser. Tests substitute
//! their own implementation.

use async_trait::async_trait;

use crate::shared::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations only fail with [`ApiError::Network`]; status handling is
/// the client's job.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::ReqwasmTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use reqwasm::http::Request;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct ReqwasmTransport;

    impl ReqwasmTransport {
        pub fn new() -> Self {
            Self
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwasmTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            Ok(RawResponse { status, body })
        }
    }
}

/// Transport for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn default_transport() -> std::sync::Arc<dyn Transport> {
    std::sync::Arc::new(ReqwestTransport::new())
}

#[cfg(target_arch = "wasm32")]
pub fn default_transport() -> std::sync::Arc<dyn Transport> {
    std::sync::Arc::new(ReqwasmTransport::new())
}
