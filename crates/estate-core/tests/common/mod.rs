#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use estate_core::{ContentApi, RawResponse, SiteError, SiteResult};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// A request seen by [`MockApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
enum Reply {
    Response(RawResponse),
    Transport(String),
}

/// In-memory [`ContentApi`] with scripted replies per path.
///
/// When gated, every request waits for [`MockApi::release`] before replying,
/// which lets a test tear a section down while its request is in flight.
#[derive(Default)]
pub struct MockApi {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Arc<Notify>>,
    started: Arc<Notify>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    pub fn respond(self, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .insert(path.to_string(), Reply::Response(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, path: &str, message: &str) -> Self {
        self.replies
            .lock()
            .insert(path.to_string(), Reply::Transport(message.to_string()));
        self
    }

    /// Let one gated request through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Wait until a request has reached the mock.
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    async fn reply(&self, method: &'static str, path: &str, body: Option<serde_json::Value>) -> SiteResult<RawResponse> {
        self.calls.lock().push(Call {
            method,
            path: path.to_string(),
            body,
        });
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.replies.lock().get(path).cloned();
        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Transport(message)) => Err(SiteError::Transport(message)),
            None => Ok(RawResponse::new(404, r#"{"message":"Not Found"}"#)),
        }
    }
}

#[async_trait]
impl ContentApi for MockApi {
    async fn get(&self, path: &str) -> SiteResult<RawResponse> {
        self.reply("GET", path, None).await
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> SiteResult<RawResponse> {
        self.reply("POST", path, Some(body.clone())).await
    }
}
