use std::sync::Arc;

use tagdeck_core::error::BootstrapError;
use tagdeck_core::identity::IdentityProvider;
use tagdeck_core::tenant::{TenantConfigApi, bootstrap_locations};
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;
use crate::events::PanelEvent;

/// Runs the tenant bootstrap until it finishes or `cancel` fires.
pub async fn tenant_bootstrap(
    task: TaskId,
    identity: Arc<dyn IdentityProvider>,
    api: Arc<dyn TenantConfigApi>,
    group_claim: String,
    cancel: CancellationToken,
) -> PanelEvent {
    let result = tokio::select! {
        biased;
        () = cancel.cancelled() => Err(BootstrapError::Cancelled),
        result = bootstrap_locations(identity.as_ref(), api.as_ref(), &group_claim) => result,
    };
    PanelEvent::BootstrapFinished { task, result }
}
