//! Panel reducer.
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crate::effects::PanelEffect;
use crate::events::PanelEvent;
use crate::features::{auth, tabs};
use crate::state::PanelState;

/// The main reducer function.
pub fn update(state: &mut PanelState, event: PanelEvent) -> Vec<PanelEffect> {
    let PanelState {
        tabs: tab_state,
        auth: auth_state,
        task_seq,
        tasks,
    } = state;

    match event {
        PanelEvent::EntryOpened(entry) => {
            tabs::handle_entry_opened(tab_state, entry, task_seq, &mut tasks.revisions_probe)
        }
        PanelEvent::EditableChanged(editable) => tabs::handle_editable_changed(
            tab_state,
            editable,
            task_seq,
            &mut tasks.revisions_probe,
        ),
        PanelEvent::EditModeChanged(edit_mode) => tabs::handle_edit_mode_changed(
            tab_state,
            edit_mode,
            task_seq,
            &mut tasks.revisions_probe,
        ),
        PanelEvent::DescriptionChanged(described) => {
            tab_state.have_description = described;
            tab_state.rebuild();
            vec![]
        }
        PanelEvent::CapabilitiesChanged(capabilities) => {
            tab_state.capabilities = capabilities;
            tab_state.rebuild();
            vec![]
        }
        PanelEvent::PanelOpenChanged(open) => {
            tab_state.panel_open = open;
            vec![]
        }
        PanelEvent::PersistedTabChanged(index) => {
            tab_state.persisted_tab = index;
            vec![]
        }
        PanelEvent::TabActivated(index) => tabs::handle_tab_activated(tab_state, index),
        PanelEvent::TabClicked { selected, index } => {
            tabs::handle_tab_clicked(tab_state, selected, index)
        }
        PanelEvent::RevisionsProbed {
            task,
            entry,
            exists,
        } => {
            tabs::handle_revisions_probed(
                tab_state,
                &mut tasks.revisions_probe,
                task,
                &entry,
                exists,
            );
            vec![]
        }
        PanelEvent::Auth(notification) => auth::handle_auth_notification(
            auth_state,
            notification,
            task_seq,
            &mut tasks.tenant_bootstrap,
        ),
        PanelEvent::BootstrapFinished { task, result } => {
            auth::handle_bootstrap_finished(&mut tasks.tenant_bootstrap, task, result)
        }
    }
}
