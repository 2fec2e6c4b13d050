//! Panel effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover host writes and task spawning only; the reducer never performs
//! I/O directly.
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `PanelEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided token.

use tagdeck_types::{Entry, LocationRecord, Session};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute, in order.
#[derive(Debug)]
pub enum PanelEffect {
    /// Check whether the entry's revisions backup directory exists.
    ProbeRevisions { task: TaskId, entry: Entry },

    /// Resolve the tenant and import its locations.
    StartTenantBootstrap {
        task: TaskId,
        group_claim: String,
        cancel: CancellationToken,
    },

    /// Cancel a running task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Prepare the assistant chat history for the opened entry.
    InitChatHistory,

    /// Persist the selected tab (`None` clears the selection).
    SetEntryContainerTab { index: Option<usize> },

    /// Open the properties panel.
    OpenPanel,

    /// Flip the properties panel open/closed.
    ToggleProperties,

    /// Publish the signed-in user (`None` on sign-out).
    SetLoggedInUser { session: Option<Session> },

    /// Application-wide initialization after a sign-in.
    InitApp,

    /// Merge locations into the location store.
    AddLocations {
        locations: Vec<LocationRecord>,
        override_existing: bool,
    },
}
