// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional persistence collaborator trait.

use async_trait::async_trait;

use crate::error::TripweaveError;
use crate::itinerary::SavedItinerary;
use crate::traits::adapter::PluginAdapter;

/// Stores finalized itineraries on behalf of a user.
///
/// The planner works without one; saving is simply unavailable.
#[async_trait]
pub trait PersistenceAdapter: PluginAdapter {
    async fn save_itinerary(&self, record: SavedItinerary) -> Result<(), TripweaveError>;

    /// Every itinerary saved for `user_id`, in storage order.
    async fn list_itineraries(&self, user_id: &str) -> Result<Vec<SavedItinerary>, TripweaveError>;
}
