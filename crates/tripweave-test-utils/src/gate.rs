// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-driven call completion for ordering tests.
//!
//! A gated mock parks every call as a [`PendingCall`] on a channel. The test
//! takes calls off the channel and answers them in whatever order it needs.

use tokio::sync::{mpsc, oneshot};

use tripweave_core::TransportError;

/// One intercepted service call awaiting an answer from the test.
#[derive(Debug)]
pub struct PendingCall<Req, Resp> {
    pub request: Req,
    responder: oneshot::Sender<Result<Resp, TransportError>>,
}

impl<Req, Resp> PendingCall<Req, Resp> {
    /// Completes the call. Ignored if the caller has gone away.
    pub fn respond(self, outcome: Result<Resp, TransportError>) {
        let _ = self.responder.send(outcome);
    }
}

/// Receiving end handed to the test.
pub type CallQueue<Req, Resp> = mpsc::UnboundedReceiver<PendingCall<Req, Resp>>;

#[derive(Debug, Clone)]
pub(crate) struct Gate<Req, Resp> {
    tx: mpsc::UnboundedSender<PendingCall<Req, Resp>>,
}

impl<Req, Resp> Gate<Req, Resp> {
    pub(crate) fn channel() -> (Self, CallQueue<Req, Resp>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Parks `request` until the test answers it.
    pub(crate) async fn pass(&self, request: Req) -> Result<Resp, TransportError> {
        let (responder, rx) = oneshot::channel();
        if self.tx.send(PendingCall { request, responder }).is_err() {
            return Err(abandoned());
        }
        rx.await.unwrap_or_else(|_| Err(abandoned()))
    }
}

fn abandoned() -> TransportError {
    TransportError::NetworkUnreachable {
        message: "mock call abandoned".to_string(),
    }
}
