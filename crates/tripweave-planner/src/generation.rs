// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle of itinerary generation attempts.
//!
//! Every submission takes a fresh [`AttemptToken`]. The session state lives in
//! a `watch` channel together with the token that produced it, and an outcome
//! is committed only if its token is still the latest one. A slower, older
//! attempt can therefore never overwrite a newer one.
//!
//! States: `Idle -> Pending -> Ready | Failed`, and any state `-> Pending` on
//! a new submission.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use tripweave_core::{
    Day, GenerationResponse, GenerationResult, ItineraryService, TransportError, TripRequest,
};

use crate::budget::BudgetBreakdown;
use crate::currency::CurrencyNormalizer;
use crate::narrative::{NarrativeParser, summarize};
use crate::request::to_wire;

/// Identifies one generation attempt. Later attempts compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AttemptToken(u64);

impl AttemptToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Visible state of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationState {
    Idle,
    Pending {
        request: Arc<TripRequest>,
    },
    Ready(Arc<GenerationResult>),
    Failed {
        request: Arc<TripRequest>,
        reason: TransportError,
    },
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "idle"),
            GenerationState::Pending { .. } => write!(f, "pending"),
            GenerationState::Ready(_) => write!(f, "ready"),
            GenerationState::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// A state paired with the attempt that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSnapshot {
    pub attempt: AttemptToken,
    pub state: GenerationState,
}

/// Whether an attempt's outcome reached the visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Committed,
    /// A newer attempt began first; the outcome was discarded.
    Superseded,
}

/// Owns generation attempts and the resulting itinerary.
pub struct GenerationSession {
    service: Arc<dyn ItineraryService>,
    normalizer: CurrencyNormalizer,
    parser: NarrativeParser,
    state: watch::Sender<GenerationSnapshot>,
}

impl GenerationSession {
    pub fn new(
        service: Arc<dyn ItineraryService>,
        normalizer: CurrencyNormalizer,
        parser: NarrativeParser,
    ) -> Self {
        let (state, _) = watch::channel(GenerationSnapshot {
            attempt: AttemptToken::default(),
            state: GenerationState::Idle,
        });
        Self {
            service,
            normalizer,
            parser,
            state,
        }
    }

    /// A receiver that observes every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<GenerationSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        self.state.borrow().clone()
    }

    pub fn state(&self) -> GenerationState {
        self.state.borrow().state.clone()
    }

    /// The finalized itinerary, when the session is Ready.
    pub fn result(&self) -> Option<Arc<GenerationResult>> {
        match &self.state.borrow().state {
            GenerationState::Ready(result) => Some(Arc::clone(result)),
            _ => None,
        }
    }

    /// Starts a new attempt: bumps the token and enters Pending in one step.
    pub fn begin(&self, request: Arc<TripRequest>) -> AttemptToken {
        let mut token = AttemptToken::default();
        self.state.send_modify(|snapshot| {
            snapshot.attempt = snapshot.attempt.next();
            snapshot.state = GenerationState::Pending {
                request: Arc::clone(&request),
            };
            token = snapshot.attempt;
        });
        info!(
            attempt = token.value(),
            destination = %request.destination,
            "generation attempt started"
        );
        token
    }

    /// Applies `outcome` if `token` is still the latest attempt.
    pub fn commit(
        &self,
        token: AttemptToken,
        request: Arc<TripRequest>,
        outcome: Result<GenerationResult, TransportError>,
    ) -> AttemptOutcome {
        let mut outcome = Some(outcome);
        let applied = self.state.send_if_modified(|snapshot| {
            if snapshot.attempt != token {
                return false;
            }
            snapshot.state = match outcome.take() {
                Some(Ok(result)) => GenerationState::Ready(Arc::new(result)),
                Some(Err(reason)) => GenerationState::Failed {
                    request: Arc::clone(&request),
                    reason,
                },
                None => return false,
            };
            true
        });

        if applied {
            AttemptOutcome::Committed
        } else {
            debug!(
                attempt = token.value(),
                latest = self.state.borrow().attempt.value(),
                "discarding stale generation outcome"
            );
            AttemptOutcome::Superseded
        }
    }

    /// Submits `request` and waits for its outcome.
    pub async fn submit(&self, request: TripRequest) -> AttemptOutcome {
        self.run(Arc::new(request)).await
    }

    /// Resubmits the failed request. `None` unless the session is Failed.
    pub async fn retry(&self) -> Option<AttemptOutcome> {
        let request = match &self.state.borrow().state {
            GenerationState::Failed { request, .. } => Arc::clone(request),
            _ => return None,
        };
        info!(destination = %request.destination, "retrying failed generation");
        Some(self.run(request).await)
    }

    async fn run(&self, request: Arc<TripRequest>) -> AttemptOutcome {
        let token = self.begin(Arc::clone(&request));
        let wire = to_wire(&request, self.normalizer.target_code());

        let outcome = match self.service.generate(wire).await {
            Ok(response) => self.finalize(&request, response),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(result) => info!(
                attempt = token.value(),
                days = result.days.len(),
                total = %result.total_budget,
                "itinerary ready"
            ),
            Err(e) => warn!(
                attempt = token.value(),
                reason = e.reason(),
                error = %e,
                "itinerary generation failed"
            ),
        }

        self.commit(token, request, outcome)
    }

    /// Builds the client-side result from a service response.
    fn finalize(
        &self,
        request: &TripRequest,
        response: GenerationResponse,
    ) -> Result<GenerationResult, TransportError> {
        if response.itinerary.trim().is_empty() {
            return Err(TransportError::MalformedResponse {
                message: "service returned an empty itinerary".to_string(),
            });
        }

        let budget = BudgetBreakdown::for_request(request);
        let raw_itinerary = self.normalizer.rewrite(&response.itinerary);

        let mut days = match response.days {
            Some(days) if !days.is_empty() => days,
            _ => self.parser.days(&response.itinerary, request.dates.start()),
        };
        days.iter_mut().for_each(|day| self.normalize_day(day));
        days.sort_by_key(|day| day.date);
        debug!(
            chars = raw_itinerary.len(),
            days = days.len(),
            "itinerary normalized"
        );

        Ok(GenerationResult {
            destination: request.destination.clone(),
            dates: request.dates,
            travelers: request.travelers,
            nights: budget.nights,
            total_amount: budget.total,
            daily_amount: budget.daily,
            total_budget: self.normalizer.format_amount(budget.total),
            daily_budget: self.normalizer.format_amount(budget.daily),
            weather_summary: response
                .weather
                .as_deref()
                .map(|w| self.normalizer.rewrite(w.trim()))
                .unwrap_or_default(),
            summary: self.normalizer.rewrite(&summarize(
                response.summary.as_deref(),
                &response.itinerary,
                &request.destination,
            )),
            raw_itinerary,
            days,
        })
    }

    fn normalize_day(&self, day: &mut Day) {
        day.weather_note = self.normalizer.rewrite(&day.weather_note);
        for activity in &mut day.activities {
            activity.cost = self.normalizer.rewrite(&activity.cost);
            if let Some(notes) = activity.notes.as_mut() {
                *notes = self.normalizer.rewrite(notes);
            }
        }
    }
}
