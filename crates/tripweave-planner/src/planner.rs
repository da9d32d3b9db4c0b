// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `TripPlanner` facade.
//!
//! Wires the request builder, the generation session and the chat service
//! together with the optional auth and persistence collaborators. There is no
//! global planner; callers own one and share it by `Arc`.

use std::sync::Arc;

use tracing::{debug, info};
use tripweave_config::TripweaveConfig;
use tripweave_core::{
    AuthAdapter, ChatPreferences, ChatService, GenerationResult, ItineraryService,
    PersistenceAdapter, PinId, SavedItinerary, TripweaveError, UserProfile,
};

use crate::catalog::CommunityCatalog;
use crate::chat::ChatSession;
use crate::currency::CurrencyNormalizer;
use crate::generation::{AttemptOutcome, GenerationSession};
use crate::narrative::NarrativeParser;
use crate::navigator::ItineraryNavigator;
use crate::request::{RequestBuilder, TripForm};

pub struct TripPlanner {
    builder: RequestBuilder,
    generation: GenerationSession,
    chat_service: Arc<dyn ChatService>,
    preferences: ChatPreferences,
    error_marker: String,
    auth: Option<Arc<dyn AuthAdapter>>,
    persistence: Option<Arc<dyn PersistenceAdapter>>,
}

impl TripPlanner {
    pub fn new(
        config: &TripweaveConfig,
        itinerary: Arc<dyn ItineraryService>,
        chat: Arc<dyn ChatService>,
    ) -> Result<Self, TripweaveError> {
        let normalizer = CurrencyNormalizer::new(&config.currency)?;
        let preferences = ChatPreferences {
            currency: normalizer.target_code().to_string(),
            country: normalizer.country().to_string(),
        };
        let generation = GenerationSession::new(itinerary, normalizer, NarrativeParser::new()?);

        Ok(Self {
            builder: RequestBuilder::new(&config.planner),
            generation,
            chat_service: chat,
            preferences,
            error_marker: config.chat.error_marker.clone(),
            auth: None,
            persistence: None,
        })
    }

    pub fn with_auth(mut self, auth: Arc<dyn AuthAdapter>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_persistence(mut self, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn generation(&self) -> &GenerationSession {
        &self.generation
    }

    /// Validates `form` and submits it.
    ///
    /// Validation errors return immediately and nothing is sent.
    pub async fn plan(&self, form: &TripForm) -> Result<AttemptOutcome, TripweaveError> {
        let request = self.builder.build(form)?;
        Ok(self.generation.submit(request).await)
    }

    /// Resubmits the last request when the session is Failed.
    pub async fn retry(&self) -> Option<AttemptOutcome> {
        self.generation.retry().await
    }

    pub fn result(&self) -> Option<Arc<GenerationResult>> {
        self.generation.result()
    }

    pub fn navigator(&self) -> Option<ItineraryNavigator> {
        self.result().map(ItineraryNavigator::new)
    }

    /// A fresh chat session about the current result.
    pub fn open_chat(&self) -> Option<ChatSession> {
        self.result().map(|result| {
            ChatSession::new(
                Arc::clone(&self.chat_service),
                &result,
                self.preferences.clone(),
                self.error_marker.clone(),
            )
        })
    }

    /// Pins the current result to `catalog`.
    pub fn pin_current(&self, catalog: &mut CommunityCatalog) -> Result<PinId, TripweaveError> {
        let result = self.result().ok_or(TripweaveError::NotReady)?;
        Ok(catalog.pin_itinerary(&result)?.id)
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.auth.as_ref().and_then(|auth| auth.current_user())
    }

    fn persistence(&self) -> Result<&Arc<dyn PersistenceAdapter>, TripweaveError> {
        self.persistence
            .as_ref()
            .ok_or(TripweaveError::PersistenceUnavailable)
    }

    /// Saves the current result for the signed-in user.
    pub async fn save_current(&self) -> Result<SavedItinerary, TripweaveError> {
        let result = self.result().ok_or(TripweaveError::NotReady)?;
        let user = self.current_user().ok_or(TripweaveError::NotAuthenticated)?;
        let persistence = self.persistence()?;

        let record = SavedItinerary::from_result(user.id.as_str(), &result);
        persistence.save_itinerary(record.clone()).await?;
        info!(
            user = %user.id,
            destination = %record.destination,
            "itinerary saved"
        );
        Ok(record)
    }

    /// Itineraries previously saved by the signed-in user.
    pub async fn saved_itineraries(&self) -> Result<Vec<SavedItinerary>, TripweaveError> {
        let user = self.current_user().ok_or(TripweaveError::NotAuthenticated)?;
        let records = self.persistence()?.list_itineraries(&user.id).await?;
        debug!(user = %user.id, count = records.len(), "saved itineraries listed");
        Ok(records)
    }
}
