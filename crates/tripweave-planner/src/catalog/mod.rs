// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Community catalog: published sample itineraries plus session-local pins.
//!
//! Remote items and pins keep separate id domains. Searches return them as
//! two groups, pins first.

pub mod builtin;

use std::collections::{HashSet, VecDeque};

use chrono::Utc;
use tracing::{debug, info};
use tripweave_config::model::CatalogConfig;
use tripweave_core::{
    CatalogSource, GenerationResult, LocalPin, PinId, RemoteItem, RemoteItemId, TripweaveError,
    ValidationError,
};

pub use builtin::{BuiltinCatalog, builtin_catalog};

/// Something a catalog search can match against.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for RemoteItem {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.destination.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl Searchable for LocalPin {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.destination.to_lowercase().contains(needle)
    }
}

/// Search results, grouped by origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatches<'a> {
    /// Newest pin first.
    pub pins: Vec<&'a LocalPin>,
    /// Catalog order.
    pub remote: Vec<&'a RemoteItem>,
}

impl CatalogMatches<'_> {
    pub fn len(&self) -> usize {
        self.pins.len() + self.remote.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct CommunityCatalog {
    remote: Vec<RemoteItem>,
    pins: VecDeque<LocalPin>,
    next_pin: u64,
    likes: HashSet<RemoteItemId>,
    default_cover_image: String,
}

impl CommunityCatalog {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            remote: Vec::new(),
            pins: VecDeque::new(),
            next_pin: 1,
            likes: HashSet::new(),
            default_cover_image: config.default_cover_image.clone(),
        }
    }

    /// Replaces the remote items with the source's catalog.
    ///
    /// Pins and likes are kept.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> Result<usize, TripweaveError> {
        let items = source.fetch_catalog().await?;
        info!(source = source.name(), items = items.len(), "catalog loaded");
        self.remote = items;
        Ok(self.remote.len())
    }

    pub fn remote_items(&self) -> &[RemoteItem] {
        &self.remote
    }

    pub fn remote_item(&self, id: RemoteItemId) -> Option<&RemoteItem> {
        self.remote.iter().find(|item| item.id == id)
    }

    /// Pins, newest first.
    pub fn pins(&self) -> impl Iterator<Item = &LocalPin> {
        self.pins.iter()
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Case-insensitive substring search. A blank query matches everything.
    pub fn search(&self, query: &str) -> CatalogMatches<'_> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return CatalogMatches {
                pins: self.pins.iter().collect(),
                remote: self.remote.iter().collect(),
            };
        }
        CatalogMatches {
            pins: self.pins.iter().filter(|p| p.matches(&needle)).collect(),
            remote: self.remote.iter().filter(|r| r.matches(&needle)).collect(),
        }
    }

    /// Adds a pin at the front of the pin list.
    pub fn create_pin(
        &mut self,
        title: &str,
        destination: &str,
        notes: Option<&str>,
    ) -> Result<&LocalPin, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingField { field: "destination" });
        }

        let id = PinId(self.next_pin);
        self.next_pin += 1;
        self.pins.push_front(LocalPin {
            id,
            title: title.to_string(),
            destination: destination.to_string(),
            notes: notes
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            created_at: Utc::now(),
            cover_image: self.default_cover_image.clone(),
        });
        debug!(pin = %id, "pin created");

        Ok(&self.pins[0])
    }

    /// Pins a generated itinerary as "Trip to {destination}".
    pub fn pin_itinerary(
        &mut self,
        result: &GenerationResult,
    ) -> Result<&LocalPin, ValidationError> {
        let title = format!("Trip to {}", result.destination);
        self.create_pin(&title, &result.destination, Some(&result.summary))
    }

    /// Flips the like state of `id` and returns whether it is now liked.
    pub fn toggle_like(&mut self, id: RemoteItemId) -> bool {
        if self.likes.remove(&id) {
            false
        } else {
            self.likes.insert(id);
            true
        }
    }

    pub fn is_liked(&self, id: RemoteItemId) -> bool {
        self.likes.contains(&id)
    }

    /// Authoritative count plus the current user's like.
    pub fn display_like_count(&self, item: &RemoteItem) -> u32 {
        item.like_count.saturating_add(u32::from(self.is_liked(item.id)))
    }

    /// One-line message used when sharing a remote item.
    pub fn share_text(&self, id: RemoteItemId) -> Option<String> {
        self.remote_item(id).map(|item| {
            format!(
                "{}: {} in {} for about {} (by {})",
                item.title, item.duration, item.destination, item.budget, item.author
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripweave_test_utils::{MockCatalog, remote_item};

    async fn loaded() -> CommunityCatalog {
        let mut catalog = CommunityCatalog::new(&CatalogConfig::default());
        catalog.load(&BuiltinCatalog).await.unwrap();
        catalog
    }

    #[tokio::test]
    async fn beach_search_groups_pins_before_remote_items() {
        let mut catalog = loaded().await;
        catalog.create_pin("Beach House", "Goa", None).unwrap();
        catalog.create_pin("City Loft", "Mumbai", None).unwrap();

        let matches = catalog.search("beach");
        assert_eq!(matches.pins.len(), 1);
        assert_eq!(matches.pins[0].title, "Beach House");
        let titles: Vec<_> = matches.remote.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Greek Island Hopping", "Thailand Beach Escape"]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_destination_and_tags() {
        let catalog = loaded().await;
        assert_eq!(catalog.search("ICELAND").remote.len(), 1);
        assert_eq!(catalog.search("food").remote.len(), 2);
        assert_eq!(catalog.search("  ").len(), 6);
        assert!(catalog.search("antarctica").is_empty());
    }

    #[test]
    fn blank_pin_fields_are_rejected() {
        let mut catalog = CommunityCatalog::new(&CatalogConfig::default());
        assert_eq!(
            catalog.create_pin("", "Paris", None).unwrap_err(),
            ValidationError::MissingField { field: "title" }
        );
        assert_eq!(
            catalog.create_pin("Trip", "  ", None).unwrap_err(),
            ValidationError::MissingField { field: "destination" }
        );
        assert_eq!(catalog.pin_count(), 0);
    }

    #[test]
    fn pins_get_fresh_ids_and_default_cover() {
        let mut catalog = CommunityCatalog::new(&CatalogConfig::default());
        let first = catalog.create_pin("A", "Rome", Some("  ")).unwrap().id;
        let pin = catalog.create_pin("B", "Rome", Some("gelato")).unwrap();
        assert!(pin.id > first);
        assert_eq!(pin.notes.as_deref(), Some("gelato"));
        assert_eq!(pin.cover_image, CatalogConfig::default().default_cover_image);

        let order: Vec<_> = catalog.pins().map(|p| p.title.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
        assert!(catalog.pins().last().unwrap().notes.is_none());
    }

    #[tokio::test]
    async fn like_toggles_and_display_count() {
        let mut catalog = loaded().await;
        let paris = RemoteItemId(1);

        assert!(catalog.toggle_like(paris));
        let item = catalog.remote_item(paris).unwrap().clone();
        assert_eq!(catalog.display_like_count(&item), 129);

        assert!(!catalog.toggle_like(paris));
        assert!(!catalog.is_liked(paris));
        assert_eq!(catalog.display_like_count(&item), 128);
    }

    #[tokio::test]
    async fn display_count_saturates_at_the_top_of_the_range() {
        let mut item = remote_item(9, "Everest Base Camp", "Nepal", &["trek"]);
        item.like_count = u32::MAX;
        let mut catalog = CommunityCatalog::new(&CatalogConfig::default());
        catalog.load(&MockCatalog::with_items(vec![item.clone()])).await.unwrap();

        assert!(catalog.toggle_like(item.id));
        assert_eq!(catalog.display_like_count(&item), u32::MAX);
        assert!(!catalog.toggle_like(item.id));
        assert_eq!(catalog.display_like_count(&item), u32::MAX);
    }

    #[tokio::test]
    async fn share_text_names_the_trip() {
        let catalog = loaded().await;
        let text = catalog.share_text(RemoteItemId(3)).unwrap();
        assert!(text.starts_with("Iceland Adventure: 7 days in Reykjavik, Iceland"));
        assert!(catalog.share_text(RemoteItemId(99)).is_none());
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_items() {
        let mut catalog = CommunityCatalog::new(&CatalogConfig::default());
        let source = MockCatalog::with_items(vec![remote_item(
            7,
            "Desert Camp",
            "Jaisalmer",
            &["desert"],
        )]);
        assert_eq!(catalog.load(&source).await.unwrap(), 1);

        let broken = MockCatalog::unavailable("offline");
        assert!(catalog.load(&broken).await.is_err());
        assert_eq!(catalog.remote_items().len(), 1);
        assert_eq!(catalog.search("desert").remote[0].id, RemoteItemId(7));
    }
}
