use aws_sdk_ec2::{
    Client as Ec2Client,
    types::{Filter, Subnet, Tag, Vpc},
};
use vpcview_core::cloud_provider::{ResourceTag, SubnetDescription, VpcDescription, VpcQuery};
use vpcview_core::error::{LookupError, Result};

/// Issues a describe-VPCs call shaped by `query` and maps the response to
/// wire descriptions.
pub(super) async fn describe_vpcs(
    ec2_client: &Ec2Client,
    query: &VpcQuery,
) -> Result<Vec<VpcDescription>> {
    let mut request = ec2_client.describe_vpcs();

    if let Some(vpc_id) = &query.vpc_id {
        request = request.vpc_ids(vpc_id);
    }
    if query.default_only {
        request = request.filters(Filter::builder().name("isDefault").values("true").build());
    }

    let response = request.send().await.map_err(|error| match &query.vpc_id {
        Some(vpc_id) => LookupError::DescribeVpcFailed {
            vpc_id: vpc_id.clone(),
            reason: error.to_string(),
        },
        None => LookupError::DescribeVpcsFailed {
            reason: error.to_string(),
        },
    })?;

    Ok(response.vpcs().iter().map(vpc_description).collect())
}

/// Lists the subnets attached to one VPC.
pub(super) async fn describe_subnets(
    ec2_client: &Ec2Client,
    vpc_id: &str,
) -> Result<Vec<SubnetDescription>> {
    let response = ec2_client
        .describe_subnets()
        .filters(Filter::builder().name("vpc-id").values(vpc_id).build())
        .send()
        .await
        .map_err(|error| LookupError::DescribeSubnetsFailed {
            vpc_id: vpc_id.to_string(),
            reason: error.to_string(),
        })?;

    Ok(response.subnets().iter().map(subnet_description).collect())
}

fn vpc_description(vpc: &Vpc) -> VpcDescription {
    VpcDescription {
        vpc_id: vpc.vpc_id().map(ToString::to_string),
        cidr_block: vpc.cidr_block().map(ToString::to_string),
        is_default: vpc.is_default(),
        tags: vpc.tags().iter().map(resource_tag).collect(),
        ipv6_cidr_blocks: vpc
            .ipv6_cidr_block_association_set()
            .iter()
            .filter_map(|association| association.ipv6_cidr_block())
            .map(ToString::to_string)
            .collect(),
    }
}

fn subnet_description(subnet: &Subnet) -> SubnetDescription {
    SubnetDescription {
        subnet_id: subnet.subnet_id().map(ToString::to_string),
        vpc_id: subnet.vpc_id().map(ToString::to_string),
        cidr_block: subnet.cidr_block().map(ToString::to_string),
        availability_zone: subnet.availability_zone().map(ToString::to_string),
        tags: subnet.tags().iter().map(resource_tag).collect(),
    }
}

fn resource_tag(tag: &Tag) -> ResourceTag {
    ResourceTag {
        key: tag.key().map(ToString::to_string),
        value: tag.value().map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::VpcIpv6CidrBlockAssociation;

    #[test]
    fn vpc_mapping_keeps_wire_fields() {
        let vpc = Vpc::builder()
            .vpc_id("vpc-1")
            .cidr_block("10.0.0.0/16")
            .is_default(true)
            .tags(Tag::builder().key("Name").value("prod").build())
            .tags(Tag::builder().key("env").value("production").build())
            .ipv6_cidr_block_association_set(
                VpcIpv6CidrBlockAssociation::builder()
                    .ipv6_cidr_block("2600:1f14:abc::/56")
                    .build(),
            )
            .build();

        let description = vpc_description(&vpc);

        assert_eq!(description.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(description.cidr_block.as_deref(), Some("10.0.0.0/16"));
        assert_eq!(description.is_default, Some(true));
        assert_eq!(description.tags.len(), 2);
        assert_eq!(description.tags[0].key.as_deref(), Some("Name"));
        assert_eq!(description.tags[0].value.as_deref(), Some("prod"));
        assert_eq!(description.ipv6_cidr_blocks, ["2600:1f14:abc::/56"]);
    }

    #[test]
    fn bare_vpc_maps_to_empty_options() {
        let description = vpc_description(&Vpc::builder().build());

        assert!(description.vpc_id.is_none());
        assert!(description.cidr_block.is_none());
        assert!(description.is_default.is_none());
        assert!(description.tags.is_empty());
        assert!(description.ipv6_cidr_blocks.is_empty());
    }

    #[test]
    fn subnet_mapping_keeps_wire_fields() {
        let subnet = Subnet::builder()
            .subnet_id("subnet-9f8e7d6c")
            .vpc_id("vpc-1")
            .cidr_block("10.0.1.0/24")
            .availability_zone("us-west-2a")
            .tags(Tag::builder().key("Name").value("private-a").build())
            .build();

        let description = subnet_description(&subnet);

        assert_eq!(description.subnet_id.as_deref(), Some("subnet-9f8e7d6c"));
        assert_eq!(description.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(description.availability_zone.as_deref(), Some("us-west-2a"));
        assert_eq!(description.tags.len(), 1);
    }
}
