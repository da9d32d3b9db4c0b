// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Itinerary generation service trait.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::traits::adapter::PluginAdapter;
use crate::wire::{GenerationRequest, GenerationResponse};

/// The remote service that turns a trip request into a narrative itinerary.
///
/// Implementations must not retry on their own; retry is a user decision.
#[async_trait]
pub trait ItineraryService: PluginAdapter {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TransportError>;
}
