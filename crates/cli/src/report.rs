use vpcview_core::cloud_provider::CallerIdentity;
use vpcview_core::record::VpcRecord;

pub fn render_identity(identity: &CallerIdentity) -> String {
    format!(
        "Authenticated as: {}\nAccount ID: {}\n",
        identity.arn, identity.account
    )
}

pub fn render_vpc_listing(region: &str, vpcs: &[VpcRecord]) -> String {
    let mut out = format!("\nFound {} VPCs in region {}:\n", vpcs.len(), region);
    for (index, vpc) in vpcs.iter().enumerate() {
        out.push_str(&format!("{}. VPC ID: {}\n", index + 1, vpc.id));
        out.push_str(&format!("   Name: {}\n", vpc.name));
        out.push_str(&format!("   CIDR Block: {}\n", vpc.cidr_block));
        out.push_str(&format!("   Is Default: {}\n", vpc.is_default));
        out.push('\n');
    }
    out
}

pub fn render_default_vpc(vpc: &VpcRecord) -> String {
    format!(
        "Default VPC Information:\n   VPC ID: {}\n   Name: {}\n   CIDR Block: {}\n",
        vpc.id, vpc.name, vpc.cidr_block
    )
}
