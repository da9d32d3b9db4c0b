// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat service for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tripweave_core::{

    AdapterType, ChatRequest, ChatResponse, ChatService, HealthStatus, PluginAdapter,

    TransportError, TripweaveError,

};

use crate::gate::{CallQueue, Gate};

/// Pending chat calls in gated mode.
pub type ChatCalls = CallQueue<ChatRequest, ChatResponse>;

/// A scripted chat service.
///
/// Replies are popped from a FIFO queue; an empty queue answers
/// "mock reply". Every request is captured for assertions.
pub struct MockChatService {
    replies: Arc<Mutex<VecDeque<Result<String, TransportError>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
    gate: Option<Gate<ChatRequest, ChatResponse>>,
}

impl MockChatService {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    pub fn with_replies(replies: Vec<Result<String, TransportError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            ..Self::new()
        }
    }

    pub fn gated() -> (Self, ChatCalls) {
        let (gate, calls) = Gate::channel();
        let mock = Self {
            gate: Some(gate),
            ..Self::new()
        };
        (mock, calls)
    }

    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl Default for MockChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockChatService {
    fn name(&self) -> &str {
        "mock-chat"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Chat
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ChatService for MockChatService {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, TransportError> {
        self.requests.lock().await.push(request.clone());

        if let Some(gate) = &self.gate {
            return gate.pass(request).await;
        }

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock reply".to_string()));
        reply.map(|response| ChatResponse { response })
    }
}
