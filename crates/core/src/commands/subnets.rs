use tracing::debug;

use crate::cloud_provider::CloudProvider;
use crate::error::Result;
use crate::record::SubnetRecord;

/// Lists the subnets belonging to one VPC.
pub async fn list_subnets(
    provider: &dyn CloudProvider,
    vpc_id: &str,
) -> Result<Vec<SubnetRecord>> {
    let described = provider.describe_subnets(vpc_id).await?;
    debug!(vpc_id, count = described.len(), "described subnets");
    Ok(described.into_iter().map(SubnetRecord::from).collect())
}
