use tracing::debug;

use crate::cloud_provider::{CloudProvider, VpcQuery};
use crate::error::{NotFoundError, Result};
use crate::record::VpcRecord;

/// Fetches a single VPC by identifier.
pub async fn get_vpc_by_id(provider: &dyn CloudProvider, vpc_id: &str) -> Result<VpcRecord> {
    let mut described = provider.describe_vpcs(&VpcQuery::by_id(vpc_id)).await?;

    if described.is_empty() {
        return Err(NotFoundError::VpcNotFound {
            vpc_id: vpc_id.to_string(),
        }
        .into());
    }

    debug!(vpc_id, "VPC found");
    Ok(VpcRecord::from(described.remove(0)))
}
