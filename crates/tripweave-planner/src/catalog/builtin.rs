// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in catalog source.
//!
//! Serves the six sample itineraries of the explore board. No network calls
//! are made.

use async_trait::async_trait;
use tripweave_core::{
    AdapterType, CatalogSource, HealthStatus, PluginAdapter, RemoteItem, RemoteItemId,
    TripweaveError,
};

/// Catalog source backed by [`builtin_catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl PluginAdapter for BuiltinCatalog {
    fn name(&self) -> &str {
        "builtin-catalog"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Catalog
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteItem>, TripweaveError> {
        Ok(builtin_catalog())
    }
}

/// Returns the sample itineraries.
///
/// The catalog contains 6 entries:
/// - Weekend in Paris
/// - Japan Cherry Blossom Tour
/// - Iceland Adventure
/// - Greek Island Hopping
/// - New York City Weekend
/// - Thailand Beach Escape
pub fn builtin_catalog() -> Vec<RemoteItem> {
    vec![
        item(
            1,
            "Weekend in Paris",
            "Paris, France",
            "3 days",
            "$1200",
            128,
            "Emma Wilson",
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=2073&auto=format&fit=crop",
            &["romantic", "culture", "food"],
        ),
        item(
            2,
            "Japan Cherry Blossom Tour",
            "Tokyo & Kyoto, Japan",
            "10 days",
            "$3000",
            347,
            "Alex Chen",
            "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?q=80&w=2070&auto=format&fit=crop",
            &["nature", "culture", "spring"],
        ),
        item(
            3,
            "Iceland Adventure",
            "Reykjavik, Iceland",
            "7 days",
            "$2200",
            93,
            "Marcus Johnson",
            "https://images.unsplash.com/photo-1476610182048-b716b8518aae?q=80&w=2127&auto=format&fit=crop",
            &["adventure", "nature", "hiking"],
        ),
        item(
            4,
            "Greek Island Hopping",
            "Athens, Santorini & Mykonos",
            "12 days",
            "$2800",
            215,
            "Sofia Garcia",
            "https://images.unsplash.com/photo-1555993539-1732b0258235?q=80&w=2070&auto=format&fit=crop",
            &["beach", "relaxation", "summer"],
        ),
        item(
            5,
            "New York City Weekend",
            "New York, USA",
            "4 days",
            "$1800",
            176,
            "James Wilson",
            "https://images.unsplash.com/photo-1496588152823-86ff7695e68f?q=80&w=2070&auto=format&fit=crop",
            &["city", "shopping", "food"],
        ),
        item(
            6,
            "Thailand Beach Escape",
            "Phuket & Krabi",
            "9 days",
            "$1600",
            142,
            "Olivia Taylor",
            "https://images.unsplash.com/photo-1490077476659-095159692ab5?q=80&w=2033&auto=format&fit=crop",
            &["beach", "relaxation", "budget"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u64,
    title: &str,
    destination: &str,
    duration: &str,
    budget: &str,
    like_count: u32,
    author: &str,
    cover_image: &str,
    tags: &[&str],
) -> RemoteItem {
    RemoteItem {
        id: RemoteItemId(id),
        title: title.to_string(),
        destination: destination.to_string(),
        duration: duration.to_string(),
        budget: budget.to_string(),
        like_count,
        author: author.to_string(),
        cover_image: cover_image.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_has_six_entries() {
        assert_eq!(builtin_catalog().len(), 6);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = builtin_catalog().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn every_entry_is_tagged_and_illustrated() {
        for entry in builtin_catalog() {
            assert!(!entry.tags.is_empty(), "{} has no tags", entry.title);
            assert!(entry.cover_image.starts_with("https://"), "{}", entry.title);
        }
    }

    #[tokio::test]
    async fn source_serves_builtin_items() {
        let items = BuiltinCatalog.fetch_catalog().await.unwrap();
        assert_eq!(items, builtin_catalog());
        assert_eq!(BuiltinCatalog.adapter_type(), AdapterType::Catalog);
    }
}
