use std::future::Future;

use aws_config::{SdkConfig, meta::region::RegionProviderChain};
use aws_sdk_ec2::config::Region;
use tracing::debug;
use vpcview_core::error::{ConfigurationError, Result};

/// One candidate credential source. Resolution tries candidates in order
/// and keeps the first that yields a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// A named profile from the shared config files.
    Profile(String),
    /// The SDK default chain: environment, shared files, instance metadata.
    DefaultChain,
}

impl CredentialSource {
    pub(crate) fn describe(&self) -> String {
        match self {
            CredentialSource::Profile(name) => format!("profile {name}"),
            CredentialSource::DefaultChain => "default provider chain".to_string(),
        }
    }
}

/// The resolution order for a session: the named profile first when one is
/// given, the default chain otherwise.
pub(crate) fn candidate_sources(profile: Option<&str>) -> Vec<CredentialSource> {
    match profile {
        Some(name) => vec![
            CredentialSource::Profile(name.to_string()),
            CredentialSource::DefaultChain,
        ],
        None => vec![CredentialSource::DefaultChain],
    }
}

/// Tries each candidate in order with the given loader and returns the
/// first configuration it accepts. The candidate order is the whole
/// resolution policy; the loader is injectable so the policy can be
/// exercised without touching the environment.
pub(crate) async fn resolve_config<L, Fut>(
    candidates: &[CredentialSource],
    mut load: L,
) -> Result<SdkConfig>
where
    L: FnMut(CredentialSource) -> Fut,
    Fut: Future<Output = std::result::Result<SdkConfig, ConfigurationError>>,
{
    for candidate in candidates {
        match load(candidate.clone()).await {
            Ok(config) => {
                debug!(source = %candidate.describe(), "credential source accepted");
                return Ok(config);
            }
            Err(error) => {
                debug!(
                    source = %candidate.describe(),
                    %error,
                    "credential source rejected"
                );
            }
        }
    }

    Err(ConfigurationError::ResolutionExhausted {
        attempted: candidates.len(),
    }
    .into())
}

/// Loads one candidate through the AWS config loader, bound to `region`.
/// A configuration without a credential provider attached is rejected so
/// the failure surfaces here instead of at the first API call.
pub(crate) async fn load_source(
    source: &CredentialSource,
    region: &str,
) -> std::result::Result<SdkConfig, ConfigurationError> {
    let region_provider =
        RegionProviderChain::first_try(Region::new(region.to_string())).or_default_provider();

    let mut loader = aws_config::from_env().region(region_provider);
    if let CredentialSource::Profile(name) = source {
        loader = loader.profile_name(name);
    }

    let config = loader.load().await;
    if config.credentials_provider().is_none() {
        return Err(ConfigurationError::MissingCredentials {
            reason: source.describe(),
        });
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;
    use vpcview_core::error::Error;

    fn empty_config() -> SdkConfig {
        SdkConfig::builder().build()
    }

    #[test]
    fn profile_is_tried_before_the_default_chain() {
        let candidates = candidate_sources(Some("ops"));
        assert_eq!(
            candidates,
            [
                CredentialSource::Profile("ops".to_string()),
                CredentialSource::DefaultChain,
            ]
        );

        assert_eq!(candidate_sources(None), [CredentialSource::DefaultChain]);
    }

    #[tokio::test]
    async fn first_successful_candidate_wins() {
        let candidates = candidate_sources(Some("ops"));
        let mut attempts = Vec::new();

        let config = resolve_config(&candidates, |source| {
            attempts.push(source.describe());
            ready(Ok(empty_config()))
        })
        .await;

        assert!(config.is_ok());
        assert_eq!(attempts, ["profile ops"]);
    }

    #[tokio::test]
    async fn failing_candidate_falls_through_to_the_next() {
        let candidates = candidate_sources(Some("ops"));
        let mut attempts = Vec::new();

        let config = resolve_config(&candidates, |source| {
            attempts.push(source.describe());
            if matches!(source, CredentialSource::Profile(_)) {
                ready(Err(ConfigurationError::MissingCredentials {
                    reason: source.describe(),
                }))
            } else {
                ready(Ok(empty_config()))
            }
        })
        .await;

        assert!(config.is_ok());
        assert_eq!(attempts, ["profile ops", "default provider chain"]);
    }

    #[tokio::test]
    async fn exhausting_every_candidate_is_a_configuration_error() {
        let candidates = candidate_sources(Some("ops"));

        let error = resolve_config(&candidates, |source| {
            ready(Err(ConfigurationError::MissingCredentials {
                reason: source.describe(),
            }))
        })
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError::ResolutionExhausted { attempted: 2 })
        ));
    }
}
