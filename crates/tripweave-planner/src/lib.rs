// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Itinerary session orchestration for Tripweave.
//!
//! This crate turns trip form input into generation requests, tracks the
//! lifecycle of generation attempts, structures the result into navigable
//! days, threads a follow-up chat about the result, and keeps the community
//! catalog of sample itineraries and user pins.

pub mod budget;
pub mod catalog;
pub mod chat;
pub mod currency;
pub mod generation;
pub mod narrative;
pub mod navigator;
pub mod planner;
pub mod request;

pub use budget::BudgetBreakdown;
pub use catalog::{BuiltinCatalog, CatalogMatches, CommunityCatalog, Searchable};
pub use chat::{AskOutcome, ChatSession, Reply, Turn, TurnTicket};
pub use currency::CurrencyNormalizer;
pub use generation::{
    AttemptOutcome, AttemptToken, GenerationSession, GenerationSnapshot, GenerationState,
};
pub use narrative::NarrativeParser;
pub use navigator::ItineraryNavigator;
pub use planner::TripPlanner;
pub use request::{RequestBuilder, TripForm, parse_interests, to_wire};
