// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Tripweave planner.
//!
//! Errors are local-terminal: every component returns its own failure variant
//! instead of panicking past its caller. The three families are
//! [`ValidationError`] (bad input, never sent to a backend), [`TransportError`]
//! (a service call failed) and the crate-wide [`TripweaveError`] used at
//! collaborator and facade boundaries.

use thiserror::Error;

/// Form input that cannot become a trip request or a pin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// The end date precedes the start date.
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: String, end: String },

    /// A field was present but could not be parsed.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure of a call to the itinerary or chat service.
///
/// `Clone` so a failure can be held inside observable session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The service could not be reached (connect failure, timeout, DNS).
    #[error("service unreachable: {message}")]
    NetworkUnreachable { message: String },

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    /// The service answered successfully but the payload was unusable.
    #[error("malformed service response: {message}")]
    MalformedResponse { message: String },
}

impl TransportError {
    /// Short machine-friendly name of the failure reason.
    pub fn reason(&self) -> &'static str {
        match self {
            TransportError::NetworkUnreachable { .. } => "network_unreachable",
            TransportError::ServiceError { .. } => "service_error",
            TransportError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

/// The primary error type used across adapter traits and the planner facade.
#[derive(Debug, Error)]
pub enum TripweaveError {
    /// Configuration errors (invalid values, unusable client settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A service call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The persistence collaborator rejected or failed a write.
    #[error("persistence error: {message}")]
    Persistence {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The auth collaborator failed.
    #[error("auth error: {message}")]
    Auth { message: String },

    /// The operation requires a signed-in user.
    #[error("no user is currently authenticated")]
    NotAuthenticated,

    /// The operation requires a finalized itinerary.
    #[error("no finalized itinerary is available")]
    NotReady,

    /// The operation requires a persistence collaborator that was not configured.
    #[error("no persistence collaborator is configured")]
    PersistenceUnavailable,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
