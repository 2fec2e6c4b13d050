//! Sign-in synchronizer feature slice.
//!
//! Reacts to identity provider notifications, suppresses duplicate sign-in
//! notifications for the same session handle, and drives the one-shot
//! tenant bootstrap.

mod state;
mod update;

pub use state::{AuthPhase, AuthSyncState};
pub use update::{handle_auth_notification, handle_bootstrap_finished};
