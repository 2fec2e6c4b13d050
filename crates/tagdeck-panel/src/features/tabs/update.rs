//! Tab set controller reducer.
//!
//! Handles entry/flag changes, the revisions probe lifecycle, and tab
//! activation. Returns effects for the runtime; never performs I/O.

use tagdeck_types::Entry;

use super::state::{TabsState, is_collapse_click};
use super::tab::TabId;
use crate::common::{TaskId, TaskSeq, TaskState};
use crate::effects::PanelEffect;

/// Opens (or clears) the current entry and refreshes the revisions flag.
pub fn handle_entry_opened(
    tabs: &mut TabsState,
    entry: Option<Entry>,
    task_seq: &mut TaskSeq,
    probe: &mut TaskState,
) -> Vec<PanelEffect> {
    tabs.set_entry(entry);
    recompute_revisions_flag(tabs, task_seq, probe)
}

pub fn handle_editable_changed(
    tabs: &mut TabsState,
    is_editable: bool,
    task_seq: &mut TaskSeq,
    probe: &mut TaskState,
) -> Vec<PanelEffect> {
    tabs.is_editable = is_editable;
    recompute_revisions_flag(tabs, task_seq, probe)
}

pub fn handle_edit_mode_changed(
    tabs: &mut TabsState,
    is_edit_mode: bool,
    task_seq: &mut TaskSeq,
    probe: &mut TaskState,
) -> Vec<PanelEffect> {
    tabs.is_edit_mode = is_edit_mode;
    recompute_revisions_flag(tabs, task_seq, probe)
}

/// Starts a revisions probe for an editable entry, or drops the flag
/// synchronously otherwise.
///
/// A new probe supersedes any probe still in flight.
pub fn recompute_revisions_flag(
    tabs: &mut TabsState,
    task_seq: &mut TaskSeq,
    probe: &mut TaskState,
) -> Vec<PanelEffect> {
    if tabs.is_editable
        && let Some(entry) = tabs.entry().cloned()
    {
        let task = task_seq.next_id();
        probe.start(task, None);
        tracing::debug!(task = task.0, entry = %entry.path, "probing revisions");
        return vec![PanelEffect::ProbeRevisions { task, entry }];
    }

    probe.clear();
    if tabs.have_revisions {
        tabs.have_revisions = false;
        tabs.rebuild();
    }
    vec![]
}

/// Applies a probe result if it belongs to the current probe and entry.
pub fn handle_revisions_probed(
    tabs: &mut TabsState,
    probe: &mut TaskState,
    task: TaskId,
    entry: &Entry,
    exists: bool,
) {
    if !probe.finish_if_active(task) {
        tracing::debug!(task = task.0, entry = %entry.path, "discarding superseded revisions probe");
        return;
    }
    if tabs.entry() != Some(entry) {
        tracing::debug!(task = task.0, entry = %entry.path, "discarding revisions probe for closed entry");
        return;
    }
    if tabs.have_revisions != exists {
        tabs.have_revisions = exists;
        tabs.rebuild();
    }
}

/// Activates the tab at `index`.
///
/// Activating the AI settings tab initializes the chat history before the
/// selection is persisted.
pub fn handle_tab_activated(tabs: &mut TabsState, index: usize) -> Vec<PanelEffect> {
    let Some(tab) = tabs.tab_at(index) else {
        tracing::debug!(index, tabs = tabs.tabs().len(), "ignoring activation of missing tab");
        return vec![];
    };

    let mut effects = Vec::with_capacity(3);
    if tab.id == TabId::AiSettings {
        effects.push(PanelEffect::InitChatHistory);
    }
    tracing::debug!(index, tab = %tab.id, "tab changed");

    tabs.persisted_tab = Some(index);
    tabs.panel_open = true;
    effects.push(PanelEffect::SetEntryContainerTab { index: Some(index) });
    effects.push(PanelEffect::OpenPanel);
    effects
}

/// Handles a click on the tab at `index`.
///
/// `selected` is the selection the host rendered the tabs with, not the
/// current one: hosts deliver the activation of a new tab before its click.
/// Clicking that rendered selection again on a file collapses the panel;
/// any other click is left to `handle_tab_activated`.
pub fn handle_tab_clicked(
    tabs: &mut TabsState,
    selected: Option<usize>,
    index: usize,
) -> Vec<PanelEffect> {
    let is_file = tabs.entry().is_some_and(|entry| entry.is_file);
    if !is_collapse_click(is_file, selected, index) {
        return vec![];
    }

    tracing::debug!(index, "selected tab clicked; collapsing panel");
    tabs.persisted_tab = None;
    tabs.panel_open = !tabs.panel_open;
    vec![
        PanelEffect::SetEntryContainerTab { index: None },
        PanelEffect::ToggleProperties,
    ]
}
