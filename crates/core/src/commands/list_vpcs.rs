use tracing::debug;

use crate::cloud_provider::{CloudProvider, VpcQuery};
use crate::error::Result;
use crate::record::VpcRecord;

/// Lists every VPC in the provider's region, in the order the provider
/// returned them.
pub async fn list_all_vpcs(provider: &dyn CloudProvider) -> Result<Vec<VpcRecord>> {
    let described = provider.describe_vpcs(&VpcQuery::all()).await?;
    debug!(
        count = described.len(),
        region = provider.region(),
        "described VPCs"
    );
    Ok(described.into_iter().map(VpcRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{MockProvider, two_vpc_fixture};
    use crate::error::Error;

    #[tokio::test]
    async fn maps_every_returned_vpc() {
        let provider = MockProvider {
            vpcs: two_vpc_fixture(),
            ..MockProvider::default()
        };

        let records = list_all_vpcs(&provider).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "vpc-1");
        assert_eq!(records[0].name, "prod");
        assert!(records[0].is_default);
        assert_eq!(records[1].id, "vpc-2");
        assert_eq!(records[1].name, "");
        assert_eq!(records[1].cidr_block, "172.31.0.0/16");
    }

    #[tokio::test]
    async fn empty_region_yields_empty_list() {
        let provider = MockProvider::default();

        let records = list_all_vpcs(&provider).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_lookup_error() {
        let provider = MockProvider {
            fail_describe: true,
            ..MockProvider::default()
        };

        let error = list_all_vpcs(&provider).await.unwrap_err();
        assert!(matches!(error, Error::Lookup(_)));
    }
}
