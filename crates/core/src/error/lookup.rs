use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("describe VPCs failed: {reason}")]
    DescribeVpcsFailed { reason: String },

    #[error("describe VPC {vpc_id} failed: {reason}")]
    DescribeVpcFailed { vpc_id: String, reason: String },

    #[error("describe subnets for {vpc_id} failed: {reason}")]
    DescribeSubnetsFailed { vpc_id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum NotFoundError {
    #[error("virtual private cloud not found: {vpc_id}")]
    VpcNotFound { vpc_id: String },

    #[error("no default virtual private cloud in region {region}")]
    NoDefaultVpc { region: String },
}
