// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Tripweave integration tests.
//!
//! Provides mock collaborators for fast, deterministic, CI-runnable tests
//! without a running backend.
//!
//! # Components
//!
//! - [`MockItineraryService`] - Scripted or gated itinerary generation
//! - [`MockChatService`] - Scripted or gated chat replies
//! - [`MockAuth`] - Test-controlled sign-in state
//! - [`MockPersistence`] - Captures saved itineraries
//! - [`MockCatalog`] - Fixed catalog item list

mod gate;
pub mod mock_auth;
pub mod mock_catalog;
pub mod mock_chat;
pub mod mock_itinerary;
pub mod mock_persistence;

pub use gate::{CallQueue, PendingCall};
pub use mock_auth::{MockAuth, test_user};
pub use mock_catalog::{MockCatalog, remote_item};
pub use mock_chat::{ChatCalls, MockChatService};
pub use mock_itinerary::{GenerationCalls, MockItineraryService, sample_response};
pub use mock_persistence::MockPersistence;
