//! Entry panel controllers for tagdeck.
//!
//! Two independent state machines share one reducer and runtime:
//! - the tab set controller (`features::tabs`): which tabs an opened entry
//!   gets and which one is selected
//! - the sign-in synchronizer (`features::auth`): one tenant bootstrap per
//!   sign-in, cleared on sign-out
//!
//! The reducer (`update`) is pure; `runtime::PanelRuntime` executes its
//! effects against an `AppHost`.

pub mod common;
pub mod content;
pub mod effects;
pub mod events;
pub mod features;
pub mod runtime;
pub mod state;
pub mod update;

pub use content::{ContentKey, ContentProvider, ContentRegistry};
pub use effects::PanelEffect;
pub use events::PanelEvent;
pub use runtime::{AppHost, HostAction, PanelRuntime, PanelServices, RecordingHost};
pub use state::PanelState;
