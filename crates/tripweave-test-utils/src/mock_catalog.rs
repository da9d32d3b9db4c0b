// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock catalog source serving a fixed item list.

use async_trait::async_trait;

use tripweave_core::{

    AdapterType, CatalogSource, HealthStatus, PluginAdapter, RemoteItem, RemoteItemId,

    TripweaveError,

};

pub struct MockCatalog {
    items: Result<Vec<RemoteItem>, String>,
}

impl MockCatalog {
    pub fn with_items(items: Vec<RemoteItem>) -> Self {
        Self { items: Ok(items) }
    }

    /// A source whose every fetch fails with `message`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            items: Err(message.into()),
        }
    }
}

/// Builds a catalog item with only the searchable fields filled in.
pub fn remote_item(id: u64, title: &str, destination: &str, tags: &[&str]) -> RemoteItem {
    RemoteItem {
        id: RemoteItemId(id),
        title: title.to_string(),
        destination: destination.to_string(),
        duration: "3 days".to_string(),
        budget: "₹50,000".to_string(),
        like_count: 10,
        author: "tester".to_string(),
        cover_image: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[async_trait]
impl PluginAdapter for MockCatalog {
    fn name(&self) -> &str {
        "mock-catalog"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Catalog
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(match &self.items {
            Ok(_) => HealthStatus::Healthy,
            Err(message) => HealthStatus::Unhealthy(message.clone()),
        })
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteItem>, TripweaveError> {
        self.items.clone().map_err(TripweaveError::Internal)
    }
}
