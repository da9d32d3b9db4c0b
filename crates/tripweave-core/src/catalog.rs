// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Community catalog entries: service-origin items and user-created pins.
//!
//! The two kinds live in separate id domains and are never merged into one
//! identity space.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a catalog item served by the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RemoteItemId(pub u64);

/// Session-local identifier of a user-created pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinId(pub u64);

impl std::fmt::Display for RemoteItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pin-{}", self.0)
    }
}

/// A sample itinerary published to the explore board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    pub id: RemoteItemId,
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub budget: String,
    /// Authoritative like count from the catalog source.
    pub like_count: u32,
    pub author: String,
    pub cover_image: String,
    pub tags: Vec<String>,
}

/// A catalog entry created by the current user during this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalPin {
    pub id: PinId,
    pub title: String,
    pub destination: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cover_image: String,
}
