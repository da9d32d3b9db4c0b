// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the planner's external collaborators.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod auth;
pub mod catalog;
pub mod chat;
pub mod itinerary;
pub mod persistence;

pub use adapter::PluginAdapter;
pub use auth::AuthAdapter;
pub use catalog::CatalogSource;
pub use chat::ChatService;
pub use itinerary::ItineraryService;
pub use persistence::PersistenceAdapter;
