//! Sign-in synchronizer state.

use std::sync::Arc;

use tagdeck_types::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    SignedOut,
    SignedIn,
}

/// Session cache owned by the synchronizer.
///
/// The cached handle only deduplicates notifications; it is never used as
/// the source of truth for who is signed in.
#[derive(Debug, Clone)]
pub struct AuthSyncState {
    pub phase: AuthPhase,
    last_session: Option<Session>,
    pub last_known_username: Option<String>,
    /// Access token claim carrying the tenant groups.
    pub group_claim: String,
}

impl AuthSyncState {
    pub fn new(group_claim: impl Into<String>) -> Self {
        Self {
            phase: AuthPhase::SignedOut,
            last_session: None,
            last_known_username: None,
            group_claim: group_claim.into(),
        }
    }

    /// Returns true if `session` is the very handle seen last.
    ///
    /// Pointer identity on purpose: the provider repeats the same handle for
    /// duplicate notifications, while a fresh sign-in allocates a new one
    /// even when every field matches.
    pub fn is_known_session(&self, session: &Session) -> bool {
        self.last_session
            .as_ref()
            .is_some_and(|known| Arc::ptr_eq(known, session))
    }

    pub fn remember(&mut self, session: &Session) {
        self.phase = AuthPhase::SignedIn;
        self.last_known_username = Some(session.username.clone());
        self.last_session = Some(Arc::clone(session));
    }

    pub fn forget(&mut self) {
        self.phase = AuthPhase::SignedOut;
        self.last_known_username = None;
        self.last_session = None;
    }
}
