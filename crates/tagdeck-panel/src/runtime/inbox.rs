use tokio::sync::mpsc;

use crate::events::PanelEvent;

/// Sender for the runtime's event inbox.
pub type PanelEventSender = mpsc::UnboundedSender<PanelEvent>;

/// Receiver for the runtime's event inbox.
pub type PanelEventReceiver = mpsc::UnboundedReceiver<PanelEvent>;
