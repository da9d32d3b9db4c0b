// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication collaborator trait.

use tokio::sync::watch;

use crate::traits::adapter::PluginAdapter;
use crate::types::UserProfile;

/// Read-only view of the user's authentication session.
///
/// The planner never signs users in or out; it only asks who is present and
/// may watch for changes.
pub trait AuthAdapter: PluginAdapter {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<UserProfile>;

    /// A receiver that yields every session change.
    fn subscribe(&self) -> watch::Receiver<Option<UserProfile>>;
}
