//! Effect handlers for the panel runtime.
//!
//! Handlers are pure async functions that return a `PanelEvent`. The runtime
//! spawns them with `spawn_effect` and delivers the result through the inbox.
//! They never touch `PanelState`.

mod bootstrap;
mod revisions;

pub use bootstrap::tenant_bootstrap;
pub use revisions::probe_revisions;
