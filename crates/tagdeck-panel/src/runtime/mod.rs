//! Panel runtime - executes effects and feeds async results back.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers return a `PanelEvent`; `spawn_effect` sends it to `inbox_tx`
//! - `settle` drains `inbox_rx` until no spawned effect is outstanding
//! - `replay` interleaves inbox events with an external notification stream
//!
//! Structure:
//! - `mod.rs`: Core runtime (`PanelRuntime`, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `host.rs`: Host application boundary
//! - `handlers/`: Effect handler implementations

mod handlers;
mod host;
mod inbox;

use std::future::Future;
use std::sync::Arc;

pub use host::{AppHost, HostAction, RecordingHost};
use inbox::{PanelEventReceiver, PanelEventSender};
use tagdeck_core::identity::IdentityProvider;
use tagdeck_core::location::LocationRegistry;
use tagdeck_core::tenant::TenantConfigApi;
use tagdeck_types::AuthNotification;
use tokio::sync::mpsc;

use crate::effects::PanelEffect;
use crate::events::PanelEvent;
use crate::state::PanelState;
use crate::update;

/// External services the effect handlers talk to.
pub struct PanelServices {
    pub locations: LocationRegistry,
    pub identity: Arc<dyn IdentityProvider>,
    pub tenant_api: Arc<dyn TenantConfigApi>,
}

/// Entry panel runtime.
///
/// Owns the state and the host. Must be driven from inside a tokio runtime:
/// async effects are spawned with `tokio::spawn`.
pub struct PanelRuntime<H: AppHost> {
    pub state: PanelState,
    host: H,
    services: PanelServices,
    inbox_tx: PanelEventSender,
    inbox_rx: PanelEventReceiver,
    /// Spawned effects whose result has not been dispatched yet.
    in_flight: usize,
}

impl<H: AppHost> PanelRuntime<H> {
    pub fn new(state: PanelState, host: H, services: PanelServices) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state,
            host,
            services,
            inbox_tx,
            inbox_rx,
            in_flight: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Runs one event through the reducer and executes the resulting effects.
    pub fn dispatch(&mut self, event: PanelEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    /// Processes inbox events until every spawned effect has reported back.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(event) = self.inbox_rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.dispatch(event);
        }
    }

    /// Feeds provider notifications into the synchronizer as they arrive,
    /// dispatching async completions in between. Returns once the stream
    /// closes and all spawned effects have settled.
    ///
    /// Completions already waiting in the inbox are applied before the next
    /// notification.
    pub async fn replay(&mut self, mut notifications: mpsc::UnboundedReceiver<AuthNotification>) {
        enum Next {
            Inbox(Option<PanelEvent>),
            Notification(Option<AuthNotification>),
        }

        loop {
            let in_flight = self.in_flight > 0;
            let next = tokio::select! {
                biased;
                event = self.inbox_rx.recv(), if in_flight => Next::Inbox(event),
                notification = notifications.recv() => Next::Notification(notification),
            };

            match next {
                Next::Inbox(Some(event)) => {
                    self.in_flight -= 1;
                    self.dispatch(event);
                }
                Next::Notification(Some(notification)) => {
                    self.dispatch(PanelEvent::Auth(notification));
                }
                Next::Inbox(None) | Next::Notification(None) => break,
            }
        }

        self.settle().await;
    }

    fn execute_effects(&mut self, effects: Vec<PanelEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a handler and routes its event to the inbox.
    fn spawn_effect<F, Fut>(&mut self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = PanelEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: PanelEffect) {
        match effect {
            PanelEffect::ProbeRevisions { task, entry } => {
                let location = self.services.locations.find_location(&entry.location_id);
                self.spawn_effect(move || handlers::probe_revisions(task, entry, location));
            }
            PanelEffect::StartTenantBootstrap {
                task,
                group_claim,
                cancel,
            } => {
                let identity = Arc::clone(&self.services.identity);
                let api = Arc::clone(&self.services.tenant_api);
                self.spawn_effect(move || {
                    handlers::tenant_bootstrap(task, identity, api, group_claim, cancel)
                });
            }
            PanelEffect::CancelTask { kind, token } => {
                if let Some(cancel) = token {
                    tracing::debug!(?kind, "cancelling task");
                    cancel.cancel();
                }
            }

            // Host writes
            PanelEffect::InitChatHistory => self.host.init_chat_history(),
            PanelEffect::SetEntryContainerTab { index } => {
                if let Err(e) = self.host.set_entry_container_tab(index) {
                    tracing::warn!("Failed to persist selected tab: {e:#}");
                }
            }
            PanelEffect::OpenPanel => self.host.open_panel(),
            PanelEffect::ToggleProperties => self.host.toggle_properties(),
            PanelEffect::SetLoggedInUser { session } => self.host.logged_in(session),
            PanelEffect::InitApp => self.host.init_app(),
            PanelEffect::AddLocations {
                locations,
                override_existing,
            } => self.host.add_locations(locations, override_existing),
        }
    }
}
