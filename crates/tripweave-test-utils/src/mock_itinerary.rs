// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock itinerary service for deterministic testing.
//!
//! `MockItineraryService` implements `ItineraryService` either from a FIFO
//! queue of scripted outcomes or, in gated mode, by parking every call until
//! the test answers it.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tripweave_core::{

    AdapterType, GenerationRequest, GenerationResponse, HealthStatus, ItineraryService,

    PluginAdapter, TransportError, TripweaveError,

};

use crate::gate::{CallQueue, Gate};

/// Pending generation calls in gated mode.
pub type GenerationCalls = CallQueue<GenerationRequest, GenerationResponse>;

/// A scripted itinerary service.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty a canned
/// itinerary for the requested city is returned.
pub struct MockItineraryService {
    outcomes: Arc<Mutex<VecDeque<Result<GenerationResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    gate: Option<Gate<GenerationRequest, GenerationResponse>>,
}

impl MockItineraryService {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Create a mock pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<Result<GenerationResponse, TransportError>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            ..Self::new()
        }
    }

    /// Create a gated mock and the queue its calls arrive on.
    pub fn gated() -> (Self, GenerationCalls) {
        let (gate, calls) = Gate::channel();
        let mock = Self {
            gate: Some(gate),
            ..Self::new()
        };
        (mock, calls)
    }

    /// Add an outcome to the end of the queue.
    pub async fn push_outcome(&self, outcome: Result<GenerationResponse, TransportError>) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Every request received so far, in call order.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl Default for MockItineraryService {
    fn default() -> Self {
        Self::new()
    }
}

/// A small narrative itinerary for `city` with one dollar amount in it.
pub fn sample_response(city: &str) -> GenerationResponse {
    GenerationResponse {
        itinerary: format!(
            "A relaxed few days in {city}.\n\n\
             Day 1: Arrival, sunny\n\
             - 10:00 Check in at the hotel\n\
             - 13:00 Lunch at a local bistro ($40)\n\
             Day 2: Old town\n\
             - 09:30 Walking tour at the main square ($15)\n"
        ),
        weather: Some("Mostly sunny, highs of 24C".to_string()),
        summary: None,
        days: None,
    }
}

#[async_trait]
impl PluginAdapter for MockItineraryService {
    fn name(&self) -> &str {
        "mock-itinerary"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Itinerary
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ItineraryService for MockItineraryService {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TransportError> {
        self.requests.lock().await.push(request.clone());

        if let Some(gate) = &self.gate {
            return gate.pass(request).await;
        }

        let scripted = self.outcomes.lock().await.pop_front();
        scripted.unwrap_or_else(|| Ok(sample_response(&request.city)))
    }
}
