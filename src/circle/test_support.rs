//! Test-only transport double

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{CircleError, Result};

use super::transport::{ApiRequest, RawResponse, Transport};

/// Transport that replays queued responses and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(CircleError::Transport(message.into())));
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CircleError::Transport("no scripted response left".into())))
    }
}

/// Build a listing page body
pub fn page_json(items: Vec<serde_json::Value>, next: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "items": items,
        "next_page_token": next,
    })
}
