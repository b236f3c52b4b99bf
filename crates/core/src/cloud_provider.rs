use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Filter applied to a describe-VPCs call.
///
/// The empty query matches every VPC in the region. `vpc_id` narrows the
/// call to a single identifier, `default_only` to VPCs flagged as the
/// region default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VpcQuery {
    pub vpc_id: Option<String>,
    pub default_only: bool,
}

impl VpcQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(vpc_id: impl Into<String>) -> Self {
        Self {
            vpc_id: Some(vpc_id.into()),
            default_only: false,
        }
    }

    pub fn default_only() -> Self {
        Self {
            vpc_id: None,
            default_only: true,
        }
    }
}

/// A key/value tag as the provider reports it. Either side can be absent
/// on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl ResourceTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// One VPC entry of a describe response, still provider-shaped: optional
/// fields stay optional until the record mapping flattens them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcDescription {
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub is_default: Option<bool>,
    pub tags: Vec<ResourceTag>,
    pub ipv6_cidr_blocks: Vec<String>,
}

/// One subnet entry of a describe response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetDescription {
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub availability_zone: Option<String>,
    pub tags: Vec<ResourceTag>,
}

/// The authenticated principal as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    pub account: String,
    pub arn: String,
    pub user_id: String,
}

#[async_trait]
pub trait CloudProvider: Send + Sync {
    async fn describe_vpcs(&self, query: &VpcQuery) -> Result<Vec<VpcDescription>>;
    async fn describe_subnets(&self, vpc_id: &str) -> Result<Vec<SubnetDescription>>;
    async fn caller_identity(&self) -> Result<CallerIdentity>;
    fn region(&self) -> &str;
}
