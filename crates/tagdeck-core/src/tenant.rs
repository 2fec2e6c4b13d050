//! Tenant configuration boundary and the sign-in bootstrap sequence.

use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use tagdeck_types::{ExtConfig, LocationRecord};

use crate::error::BootstrapError;
use crate::identity::{IdentityProvider, resolve_tenant};

/// Generated query document for the tenant configuration API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCatalog {
    document: String,
}

impl QueryCatalog {
    /// Operation name of the tenant configuration query.
    pub const GET_EXT_CONFIG: &'static str = "getExtconfig";

    /// Wraps a query document. Returns `None` when the document lacks the
    /// tenant configuration operation.
    pub fn new(document: impl Into<String>) -> Option<Self> {
        let document = document.into();
        document
            .contains(Self::GET_EXT_CONFIG)
            .then_some(Self { document })
    }

    /// Loads the generated document from disk.
    ///
    /// A missing file is `Ok(None)`: the code generation has not run yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(document) => Ok(Self::new(document)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn get_ext_config(&self) -> &str {
        &self.document
    }
}

/// Tenant-scoped configuration API.
pub trait TenantConfigApi: Send + Sync {
    /// Query definitions, if the code generation artifact is present.
    fn queries(&self) -> Option<&QueryCatalog>;

    /// Fetches the configuration bundle for `tenant`. `Ok(None)` means the
    /// API returned no data.
    fn get_ext_config<'a>(
        &'a self,
        query: &'a str,
        tenant: &'a str,
    ) -> BoxFuture<'a, Result<Option<ExtConfig>, BootstrapError>>;
}

/// Runs tenant resolution and the configuration fetch.
///
/// Returns the locations to import, or `None` when the API had no data.
pub async fn bootstrap_locations(
    identity: &dyn IdentityProvider,
    api: &dyn TenantConfigApi,
    group_claim: &str,
) -> Result<Option<Vec<LocationRecord>>, BootstrapError> {
    let query = api
        .queries()
        .ok_or(BootstrapError::ArtifactMissing)?
        .get_ext_config()
        .to_string();

    let tenant = resolve_tenant(identity, group_claim).await?;
    tracing::debug!(%tenant, "tenant resolved");

    let config = api.get_ext_config(&query, &tenant).await?;
    Ok(config.map(ExtConfig::into_locations))
}
