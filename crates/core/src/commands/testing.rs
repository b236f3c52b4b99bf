use async_trait::async_trait;

use crate::cloud_provider::{
    CallerIdentity, CloudProvider, SubnetDescription, VpcDescription, VpcQuery,
};
use crate::error::{AuthenticationError, LookupError, Result};

/// In-memory provider for command tests. Holds a fixed response set and
/// applies query filtering the way the real provider would.
pub(crate) struct MockProvider {
    pub vpcs: Vec<VpcDescription>,
    pub subnets: Vec<SubnetDescription>,
    pub identity: Option<CallerIdentity>,
    pub region: String,
    pub fail_describe: bool,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            vpcs: vec![],
            subnets: vec![],
            identity: Some(CallerIdentity {
                account: "123456789012".to_string(),
                arn: "arn:aws:iam::123456789012:user/tester".to_string(),
                user_id: "AIDAEXAMPLE".to_string(),
            }),
            region: "us-west-2".to_string(),
            fail_describe: false,
        }
    }
}

#[async_trait]
impl CloudProvider for MockProvider {
    async fn describe_vpcs(&self, query: &VpcQuery) -> Result<Vec<VpcDescription>> {
        if self.fail_describe {
            return Err(LookupError::DescribeVpcsFailed {
                reason: "mock transport failure".to_string(),
            }
            .into());
        }

        let matches = self
            .vpcs
            .iter()
            .filter(|vpc| {
                if query.vpc_id.is_some() && vpc.vpc_id != query.vpc_id {
                    return false;
                }
                if query.default_only && !vpc.is_default.unwrap_or(false) {
                    return false;
                }
                true
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<SubnetDescription>> {
        if self.fail_describe {
            return Err(LookupError::DescribeSubnetsFailed {
                vpc_id: vpc_id.to_string(),
                reason: "mock transport failure".to_string(),
            }
            .into());
        }

        let matches = self
            .subnets
            .iter()
            .filter(|subnet| subnet.vpc_id.as_deref() == Some(vpc_id))
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn caller_identity(&self) -> Result<CallerIdentity> {
        self.identity.clone().ok_or_else(|| {
            AuthenticationError::ValidationFailed {
                reason: "mock credentials rejected".to_string(),
            }
            .into()
        })
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// The two-VPC fixture used across the command tests: a default VPC named
/// "prod" and an untagged non-default one.
pub(crate) fn two_vpc_fixture() -> Vec<VpcDescription> {
    use crate::cloud_provider::ResourceTag;

    vec![
        VpcDescription {
            vpc_id: Some("vpc-1".to_string()),
            cidr_block: Some("10.0.0.0/16".to_string()),
            is_default: Some(true),
            tags: vec![ResourceTag::new("Name", "prod")],
            ipv6_cidr_blocks: vec![],
        },
        VpcDescription {
            vpc_id: Some("vpc-2".to_string()),
            cidr_block: Some("172.31.0.0/16".to_string()),
            is_default: Some(false),
            tags: vec![],
            ipv6_cidr_blocks: vec![],
        },
    ]
}
