// SPDX-FileCopyrightText: 2026 Tripweave Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock auth collaborator with test-controlled sign-in state.

use async_trait::async_trait;
use tokio::sync::watch;

use tripweave_core::{

    AdapterType, AuthAdapter, HealthStatus, PluginAdapter, TripweaveError, UserProfile,

};

/// Auth session the test flips between signed-in and signed-out.
pub struct MockAuth {
    session: watch::Sender<Option<UserProfile>>,
}

impl MockAuth {
    /// A mock with nobody signed in.
    pub fn signed_out() -> Self {
        let (session, _) = watch::channel(None);
        Self { session }
    }

    pub fn signed_in(user: UserProfile) -> Self {
        let (session, _) = watch::channel(Some(user));
        Self { session }
    }

    pub fn sign_in(&self, user: UserProfile) {
        self.session.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.session.send_replace(None);
    }
}

/// A fixed profile for tests that only need someone signed in.
pub fn test_user() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        email: "traveler@example.com".to_string(),
        display_name: "Test Traveler".to_string(),
    }
}

#[async_trait]
impl PluginAdapter for MockAuth {
    fn name(&self) -> &str {
        "mock-auth"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Auth
    }

    async fn health_check(&self) -> Result<HealthStatus, TripweaveError> {
        Ok(HealthStatus::Healthy)
    }
}

impl AuthAdapter for MockAuth {
    fn current_user(&self) -> Option<UserProfile> {
        self.session.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.session.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out_are_observable() {
        let auth = MockAuth::signed_out();
        let mut rx = auth.subscribe();
        assert!(auth.current_user().is_none());

        auth.sign_in(test_user());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().map(|u| u.id.as_str()), Some("user-1"));

        auth.sign_out();
        assert!(auth.current_user().is_none());
    }
}
