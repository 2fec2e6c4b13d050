//! Tab set controller state.

use tagdeck_core::config::Capabilities;
use tagdeck_types::Entry;

use super::tab::{Tab, TabContext, TabId, build_tab_set};
use crate::content::ContentKey;

/// Resolves the selected tab position.
///
/// - panel closed: no selection
/// - nothing persisted: first tab
/// - persisted past the end: last tab
///
/// Returns `None` for an empty tab set.
pub fn resolve_selected_index(
    persisted: Option<usize>,
    tab_count: usize,
    panel_open: bool,
) -> Option<usize> {
    if !panel_open {
        return None;
    }
    let last = tab_count.checked_sub(1)?;
    Some(persisted.map_or(0, |index| index.min(last)))
}

/// Returns true when a click on `clicked` should collapse the panel: the
/// entry is a file and the tab is already selected.
pub fn is_collapse_click(is_file: bool, selected: Option<usize>, clicked: usize) -> bool {
    is_file && selected == Some(clicked)
}

/// Inputs and derived tab set of the entry panel.
#[derive(Debug, Clone)]
pub struct TabsState {
    entry: Option<Entry>,
    pub is_editable: bool,
    pub is_edit_mode: bool,
    /// Result of the last revisions probe applied for the current entry.
    pub have_revisions: bool,
    pub have_description: bool,
    pub capabilities: Capabilities,
    pub panel_open: bool,
    /// Mirror of the host's persisted tab index; may be stale.
    pub persisted_tab: Option<usize>,
    tabs: Vec<Tab>,
}

impl TabsState {
    pub fn new(capabilities: Capabilities, panel_open: bool, persisted_tab: Option<usize>) -> Self {
        Self {
            entry: None,
            is_editable: false,
            is_edit_mode: false,
            have_revisions: false,
            have_description: false,
            capabilities,
            panel_open,
            persisted_tab,
            tabs: Vec::new(),
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    /// Replaces the opened entry. Revisions found for a previous entry do
    /// not carry over.
    pub fn set_entry(&mut self, entry: Option<Entry>) {
        if self.entry != entry {
            self.have_revisions = false;
        }
        self.entry = entry;
        self.rebuild();
    }

    pub fn context(&self) -> TabContext {
        TabContext {
            have_revisions: self.have_revisions,
            have_description: self.have_description,
            capabilities: self.capabilities,
        }
    }

    /// Recomputes the tab set from the current inputs.
    pub fn rebuild(&mut self) {
        self.tabs = match &self.entry {
            Some(entry) => build_tab_set(entry, &self.context()),
            None => Vec::new(),
        };
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }

    pub fn tab_at(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        resolve_selected_index(self.persisted_tab, self.tabs.len(), self.panel_open)
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected_index().and_then(|index| self.tabs.get(index))
    }

    /// Mount key for the selected tab's content.
    pub fn selected_content_key(&self) -> Option<ContentKey> {
        let tab = self.selected_tab()?;
        let entry = self.entry.as_ref()?;
        Some(ContentKey::new(tab.id, entry))
    }
}
