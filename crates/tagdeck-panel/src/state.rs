//! Panel state.

use tagdeck_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthSyncState;
use crate::features::tabs::TabsState;

/// Everything the reducer owns.
#[derive(Debug)]
pub struct PanelState {
    pub tabs: TabsState,
    pub auth: AuthSyncState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
}

impl PanelState {
    pub fn new(config: &Config) -> Self {
        Self {
            tabs: TabsState::new(config.capabilities(), config.panel.open, config.panel.tab),
            auth: AuthSyncState::new(config.auth.group_claim.clone()),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
        }
    }
}
