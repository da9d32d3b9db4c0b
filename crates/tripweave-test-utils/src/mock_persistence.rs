// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock persistence collaborator that captures saved itineraries.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tripweave_core::{

    AdapterType, HealthStatus, PersistenceAdapter, PluginAdapter, SavedItinerary, TripweaveError,

};

/// Records every save. In failing mode every save is rejected.
pub struct MockPersistence {
    saved: Arc<Mutex<Vec<SavedItinerary>>>,
    fail_with: Option<String>,
}

impl MockPersistence {
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new()
        }
    }

    /// Seeds a record as if it had been saved earlier.
    pub async fn preload(&self, record: SavedItinerary) {
        self.saved.lock().await.push(record);
    }

    pub async fn saved(&self) -> Vec<SavedItinerary> {
        self.saved.lock().await.clone()
    }
}

impl Default for MockPersistence {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockPersistence {
    fn name(&self) -> &str {
        "mock-persistence"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Persistence
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl PersistenceAdapter for MockPersistence {
    async fn save_itinerary(&self, record: SavedItinerary) -> Result<(), TripweaveError> {
        if let Some(message) = &self.fail_with {
            return Err(TripweaveError::Persistence {
                message: message.clone(),
                source: None,
            });
        }
        self.saved.lock().await.push(record);
        Ok(())
    }

    async fn list_itineraries(&self, user_id: &str) -> Result<Vec<SavedItinerary>, TripweaveError> {
        if let Some(message) = &self.fail_with {
            return Err(TripweaveError::Persistence {
                message: message.clone(),
                source: None,
            });
        }
        Ok(self
            .saved
            .lock()
            .await
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}
