use async_trait::async_trait;
use aws_sdk_ec2::Client as Ec2Client;
use vpcview_core::cloud_provider::{
    CallerIdentity, CloudProvider, SubnetDescription, VpcDescription, VpcQuery,
};
use vpcview_core::error::Result;

use crate::session::SessionManager;
use crate::vpc;

/// AWS-backed implementation of the provider capability trait.
pub struct AwsProvider {
    session: SessionManager,
    ec2_client: Ec2Client,
}

impl AwsProvider {
    pub async fn new(region: &str, profile: Option<&str>) -> Result<Self> {
        let session = SessionManager::new(region, profile).await?;
        Ok(Self::from_session(session))
    }

    pub fn from_session(session: SessionManager) -> Self {
        let ec2_client = session.ec2_client();
        Self {
            session,
            ec2_client,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    async fn describe_vpcs(&self, query: &VpcQuery) -> Result<Vec<VpcDescription>> {
        vpc::describe_vpcs(&self.ec2_client, query).await
    }

    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<SubnetDescription>> {
        vpc::describe_subnets(&self.ec2_client, vpc_id).await
    }

    async fn caller_identity(&self) -> Result<CallerIdentity> {
        self.session.caller_identity().await
    }

    fn region(&self) -> &str {
        self.session.region()
    }
}
