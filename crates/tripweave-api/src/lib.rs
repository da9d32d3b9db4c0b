// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP adapters for the Tripweave backend.
//!
//! This crate implements [`ItineraryService`] and [`ChatService`] over the
//! backend's JSON endpoints. Both adapters share one [`ServiceClient`] so they
//! reuse a connection pool.

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::{debug, info};
use tripweave_config::TripweaveConfig;
use tripweave_core::{
    AdapterType, ChatRequest, ChatResponse, ChatService, GenerationRequest, GenerationResponse,
    HealthStatus, ItineraryService, PluginAdapter, TransportError, TripweaveError,
};

pub use crate::client::ServiceClient;

/// Itinerary generation over `POST {base_url}{generate_path}`.
#[derive(Debug, Clone)]
pub struct HttpItineraryService {
    client: ServiceClient,
}

impl HttpItineraryService {
    pub fn new(config: &TripweaveConfig) -> Result<Self, TripweaveError> {
        let client = ServiceClient::new(&config.service)?;
        info!(base_url = client.base_url(), "itinerary service adapter initialized");
        Ok(Self { client })
    }

    pub fn with_client(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PluginAdapter for HttpItineraryService {
    fn name(&self) -> &str {
        "http-itinerary"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Itinerary
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(self.client.probe().await)
    }

    async fn shutdown(&self) -> Result<(), TripweaveError> {
        debug!("itinerary service adapter shutting down");
        Ok(())
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryService {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TransportError> {
        debug!(
            city = %request.city,
            from = %request.from_date,
            to = %request.to_date,
            "requesting itinerary"
        );
        self.client.generate(&request).await
    }
}

/// Follow-up chat over `POST {base_url}{chat_path}`.
#[derive(Debug, Clone)]
pub struct HttpChatService {
    client: ServiceClient,
}

impl HttpChatService {
    pub fn new(config: &TripweaveConfig) -> Result<Self, TripweaveError> {
        let client = ServiceClient::new(&config.service)?;
        info!(base_url = client.base_url(), "chat service adapter initialized");
        Ok(Self { client })
    }

    pub fn with_client(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PluginAdapter for HttpChatService {
    fn name(&self) -> &str {
        "http-chat"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Chat
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(self.client.probe().await)
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, TransportError> {
        debug!(chars = request.message.len(), "sending chat turn");
        self.client.chat(&request).await
    }
}
