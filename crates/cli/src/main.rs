use clap::Parser;
use tracing_subscriber::EnvFilter;
use vpcview_aws::AwsProvider;
use vpcview_core::commands;
use vpcview_core::error::{Error, Result};

mod report;

#[derive(Parser)]
#[command(name = "vpcview")]
#[command(about = "Check AWS credentials and list the VPCs of a region", long_about = None)]
struct Cli {
    /// Region to inspect
    #[arg(default_value = "us-east-1")]
    region: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(&cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let provider = AwsProvider::new(&cli.region, None).await?;

    commands::identity::validate_credentials(&provider).await?;
    let identity = commands::identity::caller_identity(&provider).await?;
    print!("{}", report::render_identity(&identity));

    let vpcs = commands::list_vpcs::list_all_vpcs(&provider).await?;
    print!("{}", report::render_vpc_listing(cli.region.as_str(), &vpcs));

    match commands::default_vpc::get_default_vpc(&provider).await {
        Ok(vpc) => print!("{}", report::render_default_vpc(&vpc)),
        // a missing default VPC is informational, not a failure
        Err(Error::NotFound(error)) => println!("No default VPC found: {error}"),
        Err(error) => return Err(error),
    }

    Ok(())
}
