// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tripweave itinerary planner.
//!
//! This crate provides the error taxonomy, the domain types shared by every
//! component, the request/response contracts of the itinerary and chat
//! services, and the adapter traits external collaborators implement.

pub mod catalog;
pub mod error;
pub mod itinerary;
pub mod traits;
pub mod types;
pub mod wire;

pub use catalog::{LocalPin, PinId, RemoteItem, RemoteItemId};
pub use error::{TransportError, TripweaveError, ValidationError};
pub use itinerary::{Activity, DateRange, Day, GenerationResult, SavedItinerary, TripRequest};
pub use types::{AdapterType, HealthStatus, UserProfile};
pub use wire::{ChatPreferences, ChatRequest, ChatResponse, GenerationRequest, GenerationResponse};

pub use traits::{

    AuthAdapter, CatalogSource, ChatService, ItineraryService, PersistenceAdapter, PluginAdapter,

};
