//! Tab set controller feature slice.
//!
//! Computes the ordered, capability-gated tab set for the opened entry,
//! resolves a valid selection against it, and reacts to tab activation.
//!
//! ## Module Structure
//!
//! - `tab.rs`: tab identities and the declarative tab catalog
//! - `state.rs`: `TabsState` and selection resolution
//! - `update.rs`: reducer functions (revisions probe, activation, reclick)

mod state;
mod tab;
mod update;

pub use state::{TabsState, is_collapse_click, resolve_selected_index};
pub use tab::{Tab, TabContext, TabIcon, TabId, build_tab_set, is_eligible};
pub use update::{
    handle_edit_mode_changed, handle_editable_changed, handle_entry_opened,
    handle_revisions_probed, handle_tab_activated, handle_tab_clicked, recompute_revisions_flag,
};
