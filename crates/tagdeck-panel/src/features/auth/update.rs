//! Sign-in synchronizer reducer.
//!
//! Handles identity provider notifications and bootstrap completion.

use std::sync::Arc;

use tagdeck_core::error::BootstrapError;
use tagdeck_types::{AuthNotification, AuthState, LocationRecord, Session};
use tokio_util::sync::CancellationToken;

use super::state::AuthSyncState;
use crate::common::{TaskId, TaskKind, TaskSeq, TaskState};
use crate::effects::PanelEffect;

/// Handles one `(next_state, session)` notification.
pub fn handle_auth_notification(
    auth: &mut AuthSyncState,
    notification: AuthNotification,
    task_seq: &mut TaskSeq,
    bootstrap: &mut TaskState,
) -> Vec<PanelEffect> {
    match notification.state {
        AuthState::SignedIn => match notification.session {
            Some(session) => handle_signed_in(auth, &session, task_seq, bootstrap),
            None => {
                tracing::warn!("signed-in notification without session data");
                vec![]
            }
        },
        AuthState::SignedOut => handle_signed_out(auth, bootstrap),
        other => {
            tracing::trace!(state = ?other, "ignoring auth notification");
            vec![]
        }
    }
}

fn handle_signed_in(
    auth: &mut AuthSyncState,
    session: &Session,
    task_seq: &mut TaskSeq,
    bootstrap: &mut TaskState,
) -> Vec<PanelEffect> {
    if auth.is_known_session(session) {
        tracing::debug!(user = %session.username, "duplicate signed-in notification");
        return vec![];
    }

    let mut effects = Vec::with_capacity(4);
    if let Some(previous) = bootstrap.cancel.take() {
        effects.push(PanelEffect::CancelTask {
            kind: TaskKind::TenantBootstrap,
            token: Some(previous),
        });
    }

    let task = task_seq.next_id();
    let cancel = CancellationToken::new();
    bootstrap.start(task, Some(cancel.clone()));
    effects.push(PanelEffect::StartTenantBootstrap {
        task,
        group_claim: auth.group_claim.clone(),
        cancel,
    });

    auth.remember(session);
    tracing::info!(user = %session.username, task = task.0, "signed in");
    effects.push(PanelEffect::SetLoggedInUser {
        session: Some(Arc::clone(session)),
    });
    effects.push(PanelEffect::InitApp);
    effects
}

fn handle_signed_out(auth: &mut AuthSyncState, bootstrap: &mut TaskState) -> Vec<PanelEffect> {
    let mut effects = Vec::with_capacity(2);
    if bootstrap.is_running() {
        effects.push(PanelEffect::CancelTask {
            kind: TaskKind::TenantBootstrap,
            token: bootstrap.cancel.clone(),
        });
    }
    bootstrap.clear();

    if let Some(user) = auth.last_known_username.as_deref() {
        tracing::info!(%user, "signed out");
    }
    auth.forget();
    effects.push(PanelEffect::SetLoggedInUser { session: None });
    effects
}

/// Applies the outcome of a tenant bootstrap.
///
/// Outcomes of bootstraps superseded by a sign-out or a newer sign-in are
/// dropped. Failures are logged here and never reach the host.
pub fn handle_bootstrap_finished(
    bootstrap: &mut TaskState,
    task: TaskId,
    result: Result<Option<Vec<LocationRecord>>, BootstrapError>,
) -> Vec<PanelEffect> {
    if !bootstrap.finish_if_active(task) {
        tracing::debug!(task = task.0, "discarding superseded bootstrap result");
        return vec![];
    }

    match result {
        Ok(Some(locations)) => {
            tracing::info!(count = locations.len(), "importing tenant locations");
            vec![PanelEffect::AddLocations {
                locations,
                override_existing: false,
            }]
        }
        Ok(None) => {
            tracing::debug!("tenant configuration returned no data");
            vec![]
        }
        Err(e) if e.is_diagnostic() => {
            tracing::debug!(error = %e, "tenant bootstrap skipped");
            vec![]
        }
        Err(e) => {
            tracing::error!(error = %e, "tenant bootstrap failed");
            vec![]
        }
    }
}
