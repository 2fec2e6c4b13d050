//! Auth command handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tagdeck_core::config::Config;
use tagdeck_core::location::LocationRegistry;
use tagdeck_panel::features::auth::AuthPhase;
use tagdeck_panel::{PanelEvent, PanelRuntime, PanelServices, PanelState, RecordingHost};

use super::fixture::{ReplayFixture, state_name};

/// Replays a fixture one notification at a time, letting each bootstrap
/// finish before the next notification, and prints what the host saw.
pub async fn replay(config: &Config, fixture_path: &Path) -> Result<()> {
    let fixture = ReplayFixture::load(fixture_path)?;
    let services = PanelServices {
        locations: LocationRegistry::new(),
        identity: Arc::new(fixture.identity(&config.auth.group_claim)),
        tenant_api: Arc::new(fixture.tenant_api(config.auth.queries_file.as_deref())?),
    };
    let mut runtime = PanelRuntime::new(PanelState::new(config), RecordingHost::new(), services);

    let notifications = fixture.notifications();
    tracing::info!(
        fixture = %fixture_path.display(),
        notifications = notifications.len(),
        "replaying auth notifications"
    );
    for notification in notifications {
        let user = notification
            .session
            .as_ref()
            .map(|s| format!(" {}", s.username))
            .unwrap_or_default();
        println!("{}{user}", state_name(notification.state));

        runtime.dispatch(PanelEvent::Auth(notification));
        runtime.settle().await;

        let actions = runtime.host_mut().take_actions();
        tracing::debug!(actions = actions.len(), "notification settled");
        if actions.is_empty() {
            println!("  (no change)");
        }
        for action in actions {
            println!("  {action}");
        }
    }

    let phase = match runtime.state.auth.phase {
        AuthPhase::SignedIn => "signed in",
        AuthPhase::SignedOut => "signed out",
    };
    println!("final: {phase}");
    Ok(())
}
