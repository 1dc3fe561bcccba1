// Scripted in-memory transport for tests.
//
// Responses are queued per (method, path) and handed out in order. Every call
// is recorded so tests can assert on what reached the "network". Clones share
// state, so a test keeps one handle while the code under test owns another.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::JsonTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Request { status: u16, message: String },
    Network(String),
}

impl Scripted {
    fn into_result(self) -> Result<Value> {
        match self {
            Scripted::Json(value) => Ok(value),
            Scripted::Request { status, message } => Err(ClientError::Request { status, message }),
            Scripted::Network(message) => Err(ClientError::Network(message)),
        }
    }
}

#[derive(Default)]
struct State {
    responses: HashMap<(Method, String), VecDeque<Scripted>>,
    calls: Vec<RecordedCall>,
    latency: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, method: Method, path: &str, response: Scripted) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    /// Delay every response by `latency` (tokio time, so paused clocks apply).
    pub fn with_latency(self, latency: Duration) -> Self {
        self.state.lock().unwrap().latency = Some(latency);
        self
    }

    pub fn on_get(self, path: &str, value: Value) -> Self {
        self.push(Method::Get, path, Scripted::Json(value))
    }

    pub fn on_post(self, path: &str, value: Value) -> Self {
        self.push(Method::Post, path, Scripted::Json(value))
    }

    pub fn on_get_status(self, path: &str, status: u16, message: &str) -> Self {
        self.push(
            Method::Get,
            path,
            Scripted::Request {
                status,
                message: message.to_string(),
            },
        )
    }

    pub fn on_post_status(self, path: &str, status: u16, message: &str) -> Self {
        self.push(
            Method::Post,
            path,
            Scripted::Request {
                status,
                message: message.to_string(),
            },
        )
    }

    pub fn on_get_network_error(self, path: &str, message: &str) -> Self {
        self.push(Method::Get, path, Scripted::Network(message.to_string()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }

    async fn respond(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let (result, latency) = self.record(method, path, body);
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        result
    }

    fn record(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> (Result<Value>, Option<Duration>) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        let next = state
            .responses
            .get_mut(&(method, path.to_string()))
            .and_then(|queue| queue.pop_front());
        let result = match next {
            Some(scripted) => scripted.into_result(),
            None => Err(ClientError::Network(format!(
                "no scripted response for {method:?} {path}"
            ))),
        };
        (result, state.latency)
    }
}

#[async_trait]
impl JsonTransport for MockTransport {
    async fn get_json(&self, path: &str) -> Result<Value> {
        self.respond(Method::Get, path, None).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.respond(Method::Post, path, Some(body)).await
    }
}
