// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Community catalog source trait.

use async_trait::async_trait;

use crate::catalog::RemoteItem;
use crate::error::TripweaveError;
use crate::traits::adapter::PluginAdapter;

/// Supplies the fixed set of published sample itineraries.
#[async_trait]
pub trait CatalogSource: PluginAdapter {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteItem>, TripweaveError>;
}
