use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identity provider UI states.
///
/// Only `SignedIn` and `SignedOut` drive transitions; the remaining states
/// are delivered by the provider while a login form is in progress and are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthState {
    SignIn,
    SignUp,
    ConfirmSignIn,
    ConfirmSignUp,
    ForgotPassword,
    ResetPassword,
    VerifyContact,
    Loading,
    SignedIn,
    SignedOut,
}

/// Session payload delivered with a provider notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub username: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Shared handle to a session payload.
///
/// Handles are compared by pointer, not by value: the provider re-emits the
/// same allocation for duplicate notifications of one logical session.
pub type Session = Arc<SessionData>;

/// One `(next_state, session)` notification from the identity provider.
#[derive(Debug, Clone)]
pub struct AuthNotification {
    pub state: AuthState,
    pub session: Option<Session>,
}

impl AuthNotification {
    pub fn signed_in(session: Session) -> Self {
        Self {
            state: AuthState::SignedIn,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            state: AuthState::SignedOut,
            session: None,
        }
    }
}
