use crate::cloud_provider::{CallerIdentity, CloudProvider};
use crate::error::Result;

/// Returns the authenticated principal's identity payload.
pub async fn caller_identity(provider: &dyn CloudProvider) -> Result<CallerIdentity> {
    provider.caller_identity().await
}

/// Performs the identity check and discards the payload. Fails when the
/// credentials are rejected.
pub async fn validate_credentials(provider: &dyn CloudProvider) -> Result<()> {
    provider.caller_identity().await.map(|_| ())
}
