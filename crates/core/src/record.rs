use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cloud_provider::{ResourceTag, SubnetDescription, VpcDescription};

/// Tag key the provider uses for display names.
pub const NAME_TAG: &str = "Name";

/// Flattened view of one VPC. The display name is the value of the
/// `"Name"` tag when present, the empty string otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcRecord {
    pub id: String,
    pub name: String,
    pub cidr_block: String,
    pub is_default: bool,
    pub tags: HashMap<String, String>,
    pub ipv6_cidr_blocks: Vec<String>,
}

impl From<VpcDescription> for VpcRecord {
    fn from(vpc: VpcDescription) -> Self {
        let (name, tags) = flatten_tags(vpc.tags);
        Self {
            id: vpc.vpc_id.unwrap_or_default(),
            name,
            cidr_block: vpc.cidr_block.unwrap_or_default(),
            is_default: vpc.is_default.unwrap_or(false),
            tags,
            ipv6_cidr_blocks: vpc.ipv6_cidr_blocks,
        }
    }
}

/// Flattened view of one subnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecord {
    pub id: String,
    pub vpc_id: String,
    pub name: String,
    pub cidr_block: String,
    pub availability_zone: String,
    pub tags: HashMap<String, String>,
}

impl From<SubnetDescription> for SubnetRecord {
    fn from(subnet: SubnetDescription) -> Self {
        let (name, tags) = flatten_tags(subnet.tags);
        Self {
            id: subnet.subnet_id.unwrap_or_default(),
            vpc_id: subnet.vpc_id.unwrap_or_default(),
            name,
            cidr_block: subnet.cidr_block.unwrap_or_default(),
            availability_zone: subnet.availability_zone.unwrap_or_default(),
            tags,
        }
    }
}

/// Collects tags into a map and pulls out the display name. Tags missing
/// a key or a value are skipped.
fn flatten_tags(tags: Vec<ResourceTag>) -> (String, HashMap<String, String>) {
    let mut map = HashMap::with_capacity(tags.len());
    let mut name = String::new();

    for tag in tags {
        let (Some(key), Some(value)) = (tag.key, tag.value) else {
            continue;
        };
        if key == NAME_TAG {
            name = value.clone();
        }
        map.insert(key, value);
    }

    (name, map)
}
