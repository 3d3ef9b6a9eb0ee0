//! Scripted transport for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use super::transport::{ApiRequest, RawResponse, Transport};
use crate::shared::errors::ApiError;

#[derive(Default)]
struct Script {
    queued: VecDeque<Result<RawResponse, ApiError>>,
    fallback: Option<Result<RawResponse, ApiError>>,
    requests: Vec<ApiRequest>,
}

/// Records every request and replays queued responses in order.
///
/// When the queue is empty the fallback answers; without a fallback the
/// request fails as a network error. A gated transport holds each request
/// until [`RecordingTransport::release`] is called.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    script: Arc<Mutex<Script>>,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            script: Arc::default(),
            gate: Some(Arc::new(Semaphore::new(0))),
        }
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script.lock().unwrap().queued.push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .queued
            .push_back(Err(ApiError::network(message)));
    }

    pub fn respond_always(&self, status: u16, body: &str) {
        self.script.lock().unwrap().fallback = Some(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.script.lock().unwrap().requests.push(request);

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        let mut script = self.script.lock().unwrap();
        match script.queued.pop_front() {
            Some(next) => next,
            None => script
                .fallback
                .clone()
                .unwrap_or_else(|| Err(ApiError::network("no scripted response"))),
        }
    }
}
