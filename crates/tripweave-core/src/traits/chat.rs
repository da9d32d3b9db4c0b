// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Follow-up chat service trait.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::traits::adapter::PluginAdapter;
use crate::wire::{ChatRequest, ChatResponse};

/// The remote service answering questions about a generated itinerary.
#[async_trait]
pub trait ChatService: PluginAdapter {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, TransportError>;
}
