// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Follow-up conversation about one finalized itinerary.
//!
//! The transcript is append-only and at most one turn is pending. The pending
//! turn is always the last one, so a reply resolves by position. A turn whose
//! ticket is dropped unresolved fails with the error marker, so an abandoned
//! `ask` never leaves the session pending.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use tripweave_core::{
    ChatPreferences, ChatRequest, ChatResponse, ChatService, GenerationResult, TransportError,
};

/// State of the assistant's side of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Pending,
    Answered(String),
    /// Holds the configured error marker.
    Failed(String),
}

impl Reply {
    pub fn is_pending(&self) -> bool {
        matches!(self, Reply::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The question as typed; the service receives it trimmed.
    pub user_text: String,
    pub reply: Reply,
}

type Transcript = Arc<watch::Sender<Vec<Turn>>>;

/// Handle for the turn opened by [`ChatSession::begin`].
///
/// Dropping it without [`ChatSession::resolve`] fails the turn.
#[derive(Debug)]
pub struct TurnTicket {
    index: usize,
    request: ChatRequest,
    transcript: Transcript,
    error_marker: String,
}

impl TurnTicket {
    pub fn index(&self) -> usize {
        self.index
    }

    /// The payload to send to the chat service for this turn.
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

impl Drop for TurnTicket {
    fn drop(&mut self) {
        let abandoned = self
            .transcript
            .send_if_modified(|turns| match turns.get_mut(self.index) {
                Some(turn) if turn.reply.is_pending() => {
                    turn.reply = Reply::Failed(self.error_marker.clone());
                    true
                }
                _ => false,
            });
        if abandoned {
            warn!(turn = self.index, "chat turn abandoned before a reply arrived");
        }
    }
}

/// Result of [`ChatSession::ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// Blank text, or another turn was still pending.
    Ignored,
    Answered(String),
    Failed(String),
}

pub struct ChatSession {
    service: Arc<dyn ChatService>,
    context: String,
    preferences: ChatPreferences,
    error_marker: String,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(
        service: Arc<dyn ChatService>,
        result: &GenerationResult,
        preferences: ChatPreferences,
        error_marker: impl Into<String>,
    ) -> Self {
        let (transcript, _) = watch::channel(Vec::new());
        Self {
            service,
            context: format!("Destination: {}\n\n{}", result.destination, result.raw_itinerary),
            preferences,
            error_marker: error_marker.into(),
            transcript: Arc::new(transcript),
        }
    }

    /// Context string sent with every turn.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn turns(&self) -> Vec<Turn> {
        self.transcript.borrow().clone()
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.borrow().len()
    }

    pub fn is_pending(&self) -> bool {
        self.transcript
            .borrow()
            .last()
            .is_some_and(|t| t.reply.is_pending())
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Turn>> {
        self.transcript.subscribe()
    }

    /// Opens a pending turn for `text`.
    ///
    /// Returns `None`, leaving the transcript untouched, when `text` is blank
    /// or a turn is already pending.
    pub fn begin(&self, text: &str) -> Option<TurnTicket> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        let mut index = None;
        self.transcript.send_if_modified(|turns| {
            if turns.last().is_some_and(|t| t.reply.is_pending()) {
                return false;
            }
            turns.push(Turn {
                user_text: text.to_string(),
                reply: Reply::Pending,
            });
            index = Some(turns.len() - 1);
            true
        });

        match index {
            Some(index) => Some(TurnTicket {
                index,
                request: ChatRequest {
                    message: message.to_string(),
                    itinerary: self.context.clone(),
                    preferences: Some(self.preferences.clone()),
                },
                transcript: Arc::clone(&self.transcript),
                error_marker: self.error_marker.clone(),
            }),
            None => {
                debug!("chat turn already pending, ignoring input");
                None
            }
        }
    }

    /// Moves the ticket's turn out of Pending.
    pub fn resolve(
        &self,
        ticket: TurnTicket,
        outcome: Result<ChatResponse, TransportError>,
    ) -> Reply {
        let reply = match outcome {
            Ok(response) => Reply::Answered(response.response),
            Err(e) => {
                warn!(reason = e.reason(), error = %e, "chat request failed");
                Reply::Failed(self.error_marker.clone())
            }
        };

        self.transcript.send_if_modified(|turns| match turns.get_mut(ticket.index) {
            Some(turn) if turn.reply.is_pending() => {
                turn.reply = reply.clone();
                true
            }
            _ => false,
        });
        reply
    }

    /// Asks `text` and waits for the reply.
    pub async fn ask(&self, text: &str) -> AskOutcome {
        let Some(ticket) = self.begin(text) else {
            return AskOutcome::Ignored;
        };

        let outcome = self.service.chat(ticket.request.clone()).await;
        match self.resolve(ticket, outcome) {
            Reply::Answered(answer) => {
                info!(turns = self.turn_count(), "chat reply received");
                AskOutcome::Answered(answer)
            }
            Reply::Failed(marker) => AskOutcome::Failed(marker),
            Reply::Pending => AskOutcome::Ignored,
        }
    }
}
