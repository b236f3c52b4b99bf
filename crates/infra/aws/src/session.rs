use aws_config::SdkConfig;
use aws_sdk_ec2::Client as Ec2Client;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, info};
use vpcview_core::cloud_provider::CallerIdentity;
use vpcview_core::error::{AuthenticationError, Result};

use crate::config::{self, CredentialSource};

/// Holds the resolved provider configuration for one region/profile pair
/// and hands out clients bound to it. Immutable once constructed; a
/// different region means a new session.
pub struct SessionManager {
    region: String,
    profile: Option<String>,
    config: SdkConfig,
}

impl SessionManager {
    pub async fn new(region: &str, profile: Option<&str>) -> Result<Self> {
        let candidates = config::candidate_sources(profile);
        let config = config::resolve_config(&candidates, |source| async move {
            config::load_source(&source, region).await
        })
        .await?;

        info!(region, profile = ?profile, "provider configuration resolved");
        Ok(Self {
            region: region.to_string(),
            profile: profile.map(ToString::to_string),
            config,
        })
    }

    pub fn ec2_client(&self) -> Ec2Client {
        Ec2Client::new(&self.config)
    }

    pub fn s3_client(&self) -> S3Client {
        S3Client::new(&self.config)
    }

    pub fn sts_client(&self) -> StsClient {
        StsClient::new(&self.config)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// New session bound to another region, keeping the profile.
    pub async fn with_region(&self, region: &str) -> Result<Self> {
        Self::new(region, self.profile.as_deref()).await
    }

    /// Checks that the held credentials are accepted by the identity
    /// service. Rejection, expiry, and transport failure all surface as
    /// one wrapped authentication error.
    pub async fn validate_credentials(&self) -> Result<()> {
        self.caller_identity().await.map(|_| ())
    }

    pub async fn caller_identity(&self) -> Result<CallerIdentity> {
        let response = self
            .sts_client()
            .get_caller_identity()
            .send()
            .await
            .map_err(|error| AuthenticationError::ValidationFailed {
                reason: error.to_string(),
            })?;

        let account = identity_field(response.account(), "account")?;
        let arn = identity_field(response.arn(), "arn")?;
        let user_id = identity_field(response.user_id(), "user id")?;

        debug!(account = %account, "caller identity verified");
        Ok(CallerIdentity {
            account,
            arn,
            user_id,
        })
    }
}

fn identity_field(value: Option<&str>, field: &str) -> Result<String> {
    value.map(ToString::to_string).ok_or_else(|| {
        AuthenticationError::IncompleteIdentity {
            field: field.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vpcview_core::error::Error;

    #[test]
    fn identity_field_passes_values_through() {
        assert_eq!(identity_field(Some("123"), "account").unwrap(), "123");
    }

    #[test]
    fn missing_identity_field_is_an_authentication_error() {
        let error = identity_field(None, "arn").unwrap_err();
        assert!(matches!(
            error,
            Error::Authentication(AuthenticationError::IncompleteIdentity { ref field })
                if field == "arn"
        ));
    }
}
