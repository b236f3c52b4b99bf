use tracing::debug;

use crate::cloud_provider::{CloudProvider, VpcQuery};
use crate::error::{NotFoundError, Result};
use crate::record::VpcRecord;

/// Fetches the region's default VPC.
///
/// A region carries at most one default VPC; if the provider ever reports
/// more, the first entry wins.
pub async fn get_default_vpc(provider: &dyn CloudProvider) -> Result<VpcRecord> {
    let mut described = provider.describe_vpcs(&VpcQuery::default_only()).await?;

    if described.is_empty() {
        return Err(NotFoundError::NoDefaultVpc {
            region: provider.region().to_string(),
        }
        .into());
    }

    let record = VpcRecord::from(described.remove(0));
    debug!(vpc_id = %record.id, "default VPC found");
    Ok(record)
}
