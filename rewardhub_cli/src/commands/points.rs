//! The `points` subcommand: lists a company's active points rules.

use anyhow::Result;
use clap::Args;
use rewardhub_api::Client;

use crate::output::{print_json, print_points_rules_table, OutputFormat};

#[derive(Args)]
pub struct PointsArgs {
    /// Company to list rules for
    #[arg(long)]
    pub company_id: String,
}

pub async fn run(args: &PointsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let rules = client.points_rules(&args.company_id).await?;
    match format {
        OutputFormat::Json => print_json(&rules),
        OutputFormat::Table => print_points_rules_table(&rules),
    }
    Ok(())
}
