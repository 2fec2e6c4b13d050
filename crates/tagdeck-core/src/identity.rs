//! Identity provider boundary and tenant resolution.

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::error::{AuthError, BootstrapError};

/// Access token of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessToken {
    payload: Value,
}

impl AccessToken {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Returns the string entries of an array claim, in token order.
    pub fn groups(&self, claim: &str) -> Vec<&str> {
        self.payload
            .get(claim)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Hosted identity provider session accessor.
pub trait IdentityProvider: Send + Sync {
    /// Fetches a fresh access token for the current session.
    fn current_session(&self) -> BoxFuture<'_, Result<AccessToken, AuthError>>;
}

/// Resolves the tenant reference: the first group of `claim` in a freshly
/// fetched access token.
pub async fn resolve_tenant(
    provider: &dyn IdentityProvider,
    claim: &str,
) -> Result<String, BootstrapError> {
    let token = provider.current_session().await?;
    token
        .groups(claim)
        .first()
        .map(|tenant| (*tenant).to_string())
        .ok_or_else(|| BootstrapError::NoTenantClaim {
            claim: claim.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct FixedToken(Option<Value>);

    impl IdentityProvider for FixedToken {
        fn current_session(&self) -> BoxFuture<'_, Result<AccessToken, AuthError>> {
            let token = self.0.clone().map(AccessToken::new).ok_or(AuthError::NoSession);
            Box::pin(async move { token })
        }
    }

    #[tokio::test]
    async fn test_resolve_tenant_takes_first_group() {
        let provider = FixedToken(Some(json!({ "cognito:groups": ["acme", "other"] })));
        let tenant = resolve_tenant(&provider, "cognito:groups").await.unwrap();
        assert_eq!(tenant, "acme");
    }

    #[tokio::test]
    async fn test_resolve_tenant_without_claim() {
        let provider = FixedToken(Some(json!({ "cognito:groups": [] })));
        let err = resolve_tenant(&provider, "cognito:groups").await.unwrap_err();
        assert!(matches!(err, BootstrapError::NoTenantClaim { .. }));

        let provider = FixedToken(Some(json!({ "sub": "u1" })));
        let err = resolve_tenant(&provider, "cognito:groups").await.unwrap_err();
        assert!(matches!(err, BootstrapError::NoTenantClaim { .. }));
    }

    #[tokio::test]
    async fn test_resolve_tenant_without_session() {
        let provider = FixedToken(None);
        let err = resolve_tenant(&provider, "cognito:groups").await.unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::TenantResolution(AuthError::NoSession)
        ));
    }

    #[test]
    fn test_groups_skips_non_string_items() {
        let token = AccessToken::new(json!({ "g": [1, "a", null, "b"] }));
        assert_eq!(token.groups("g"), vec!["a", "b"]);
    }
}
