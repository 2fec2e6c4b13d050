//! Host application boundary (the write side of the panel).

use std::{fmt, mem};

use anyhow::{Result, bail};
use tagdeck_types::{LocationRecord, Session};

/// Application-level actions the panel requests from its host.
pub trait AppHost {
    /// Persists the selected tab. `None` clears the persisted selection.
    fn set_entry_container_tab(&mut self, index: Option<usize>) -> Result<()>;

    fn open_panel(&mut self);

    fn toggle_properties(&mut self);

    /// Publishes the signed-in user; `None` after sign-out.
    fn logged_in(&mut self, session: Option<Session>);

    fn init_app(&mut self);

    fn add_locations(&mut self, locations: Vec<LocationRecord>, override_existing: bool);

    fn init_chat_history(&mut self);
}

/// One recorded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    SetEntryContainerTab(Option<usize>),
    OpenPanel,
    ToggleProperties,
    LoggedIn(Option<String>),
    InitApp,
    AddLocations {
        names: Vec<String>,
        override_existing: bool,
    },
    InitChatHistory,
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAction::SetEntryContainerTab(Some(index)) => {
                write!(f, "set_entry_container_tab {index}")
            }
            HostAction::SetEntryContainerTab(None) => f.write_str("set_entry_container_tab none"),
            HostAction::OpenPanel => f.write_str("open_panel"),
            HostAction::ToggleProperties => f.write_str("toggle_properties"),
            HostAction::LoggedIn(Some(user)) => write!(f, "logged_in {user}"),
            HostAction::LoggedIn(None) => f.write_str("logged_in none"),
            HostAction::InitApp => f.write_str("init_app"),
            HostAction::AddLocations {
                names,
                override_existing,
            } => write!(
                f,
                "add_locations [{}] override={override_existing}",
                names.join(", ")
            ),
            HostAction::InitChatHistory => f.write_str("init_chat_history"),
        }
    }
}

/// Host that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub actions: Vec<HostAction>,
    /// Makes `set_entry_container_tab` fail after recording the call.
    pub fail_persist: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_actions(&mut self) -> Vec<HostAction> {
        mem::take(&mut self.actions)
    }
}

impl AppHost for RecordingHost {
    fn set_entry_container_tab(&mut self, index: Option<usize>) -> Result<()> {
        self.actions.push(HostAction::SetEntryContainerTab(index));
        if self.fail_persist {
            bail!("settings store unavailable");
        }
        Ok(())
    }

    fn open_panel(&mut self) {
        self.actions.push(HostAction::OpenPanel);
    }

    fn toggle_properties(&mut self) {
        self.actions.push(HostAction::ToggleProperties);
    }

    fn logged_in(&mut self, session: Option<Session>) {
        self.actions
            .push(HostAction::LoggedIn(session.map(|s| s.username.clone())));
    }

    fn init_app(&mut self) {
        self.actions.push(HostAction::InitApp);
    }

    fn add_locations(&mut self, locations: Vec<LocationRecord>, override_existing: bool) {
        self.actions.push(HostAction::AddLocations {
            names: locations.into_iter().map(|l| l.name).collect(),
            override_existing,
        });
    }

    fn init_chat_history(&mut self) {
        self.actions.push(HostAction::InitChatHistory);
    }
}
