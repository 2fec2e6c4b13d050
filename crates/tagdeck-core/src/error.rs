//! Error types for the panel's external boundaries.

use std::io;

use thiserror::Error;

/// Failures while asking a location about its storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocationError {
    /// No location is registered under the entry's location id.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The existence check itself failed.
    #[error("failed to check {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Failures reported by the identity provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    /// There is no signed-in session to read a token from.
    #[error("no current session")]
    NoSession,

    /// Provider-specific failure.
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Failures of the tenant bootstrap that runs after a new sign-in.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BootstrapError {
    /// The generated query document is not available.
    #[error("query document is missing; run the query code generation first")]
    ArtifactMissing,

    /// The access token carries no usable group claim.
    #[error("access token has no '{claim}' group claim")]
    NoTenantClaim { claim: String },

    /// Reading the current session failed.
    #[error("tenant resolution failed: {0}")]
    TenantResolution(#[from] AuthError),

    /// The tenant configuration fetch failed.
    #[error("tenant configuration fetch failed: {0}")]
    ConfigFetch(String),

    /// The bootstrap was abandoned because the session ended.
    #[error("bootstrap cancelled")]
    Cancelled,
}

impl BootstrapError {
    /// Returns true for conditions that are diagnostics rather than failures.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::ArtifactMissing | Self::Cancelled)
    }
}
