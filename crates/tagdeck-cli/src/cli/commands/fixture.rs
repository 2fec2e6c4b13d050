//! Replay fixtures: canned identity provider and tenant API.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use serde::Deserialize;
use serde_json::{Value, json};
use tagdeck_core::error::{AuthError, BootstrapError};
use tagdeck_core::identity::{AccessToken, IdentityProvider};
use tagdeck_core::tenant::{QueryCatalog, TenantConfigApi};
use tagdeck_types::{AuthNotification, AuthState, ExtConfig, Session, SessionData};

/// Query document used when the fixture asks for one and no
/// `[auth] queries_file` is configured.
const EXT_CONFIG_DOCUMENT: &str = "query GetExtconfig($id: ID!) {\n  getExtconfig(id: $id) {\n    id\n    Locations { items { uuid name path type isDefault isReadOnly } }\n  }\n}\n";

/// Recorded sign-in session.
///
/// ```json
/// {
///   "groups": ["acme"],
///   "tenants": { "acme": { "Locations": { "items": [{ "uuid": "l1", "name": "Photos" }] } } },
///   "notifications": [
///     { "state": "signedIn", "session": "ana" },
///     { "state": "signedIn", "session": "ana" },
///     { "state": "signedOut" }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplayFixture {
    /// Groups in the access token's group claim.
    pub groups: Vec<String>,
    /// Whether the query document is available.
    pub queries: bool,
    pub tenants: HashMap<String, ExtConfig>,
    /// Makes every configuration fetch fail with this message.
    pub fail_fetch: Option<String>,
    pub notifications: Vec<NotificationSpec>,
}

impl Default for ReplayFixture {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            queries: true,
            tenants: HashMap::new(),
            fail_fetch: None,
            notifications: Vec::new(),
        }
    }
}

/// One notification. Notifications naming the same session share one
/// handle unless `fresh` is set.
#[derive(Debug, Deserialize)]
pub struct NotificationSpec {
    pub state: AuthState,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub fresh: bool,
}

impl ReplayFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))
    }

    pub fn identity(&self, group_claim: &str) -> FixtureIdentity {
        let mut claims = serde_json::Map::new();
        claims.insert(group_claim.to_string(), json!(self.groups));
        FixtureIdentity {
            token: AccessToken::new(Value::Object(claims)),
        }
    }

    /// Builds the tenant API. A configured `queries_file` wins over the
    /// fixture's `queries` flag.
    pub fn tenant_api(&self, queries_file: Option<&Path>) -> Result<FixtureTenantApi> {
        let queries = match queries_file {
            Some(path) => QueryCatalog::load(path)?,
            None if self.queries => QueryCatalog::new(EXT_CONFIG_DOCUMENT),
            None => None,
        };
        Ok(FixtureTenantApi {
            queries,
            tenants: self.tenants.clone(),
            fail_fetch: self.fail_fetch.clone(),
        })
    }

    pub fn notifications(&self) -> Vec<AuthNotification> {
        let mut sessions: HashMap<&str, Session> = HashMap::new();
        self.notifications
            .iter()
            .map(|spec| {
                let session = spec.session.as_deref().map(|name| {
                    if spec.fresh {
                        sessions.remove(name);
                    }
                    let handle = sessions.entry(name).or_insert_with(|| {
                        Arc::new(SessionData {
                            username: name.to_string(),
                            ..SessionData::default()
                        })
                    });
                    Arc::clone(handle)
                });
                AuthNotification {
                    state: spec.state,
                    session,
                }
            })
            .collect()
    }
}

pub struct FixtureIdentity {
    token: AccessToken,
}

impl IdentityProvider for FixtureIdentity {
    fn current_session(&self) -> BoxFuture<'_, Result<AccessToken, AuthError>> {
        let token = self.token.clone();
        Box::pin(async move { Ok(token) })
    }
}

pub struct FixtureTenantApi {
    queries: Option<QueryCatalog>,
    tenants: HashMap<String, ExtConfig>,
    fail_fetch: Option<String>,
}

impl FixtureTenantApi {
    /// API without a query document; every bootstrap is skipped.
    pub fn unavailable() -> Self {
        Self {
            queries: None,
            tenants: HashMap::new(),
            fail_fetch: None,
        }
    }
}

impl TenantConfigApi for FixtureTenantApi {
    fn queries(&self) -> Option<&QueryCatalog> {
        self.queries.as_ref()
    }

    fn get_ext_config<'a>(
        &'a self,
        _query: &'a str,
        tenant: &'a str,
    ) -> BoxFuture<'a, Result<Option<ExtConfig>, BootstrapError>> {
        let result = match &self.fail_fetch {
            Some(message) => Err(BootstrapError::ConfigFetch(message.clone())),
            None => Ok(self.tenants.get(tenant).cloned()),
        };
        Box::pin(async move { result })
    }
}

/// Identity provider without a session.
pub struct SignedOutIdentity;

impl IdentityProvider for SignedOutIdentity {
    fn current_session(&self) -> BoxFuture<'_, Result<AccessToken, AuthError>> {
        Box::pin(async { Err::<AccessToken, _>(AuthError::NoSession) })
    }
}

/// Renders a notification state the way fixtures spell it.
pub fn state_name(state: AuthState) -> String {
    match serde_json::to_value(state) {
        Ok(Value::String(name)) => name,
        _ => format!("{state:?}"),
    }
}
