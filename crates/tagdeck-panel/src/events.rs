//! Panel event types.
//!
//! Everything that reaches the reducer is a `PanelEvent`: host input, identity
//! provider notifications, and async completions delivered through the
//! runtime inbox.

use tagdeck_core::config::Capabilities;
use tagdeck_core::error::BootstrapError;
use tagdeck_types::{AuthNotification, Entry, LocationRecord};

use crate::common::TaskId;

#[derive(Debug)]
pub enum PanelEvent {
    /// The opened entry changed (`None` when nothing is open).
    EntryOpened(Option<Entry>),
    EditableChanged(bool),
    EditModeChanged(bool),
    DescriptionChanged(bool),
    CapabilitiesChanged(Capabilities),
    /// The host opened or closed the panel on its own.
    PanelOpenChanged(bool),
    /// The host's persisted tab index changed outside the panel.
    PersistedTabChanged(Option<usize>),
    /// User activated the tab at this position.
    TabActivated(usize),
    /// User clicked the tab at `index` while the host showed `selected`.
    TabClicked {
        selected: Option<usize>,
        index: usize,
    },

    Auth(AuthNotification),

    // Async completions
    RevisionsProbed {
        task: TaskId,
        entry: Entry,
        exists: bool,
    },
    BootstrapFinished {
        task: TaskId,
        result: Result<Option<Vec<LocationRecord>>, BootstrapError>,
    },
}
