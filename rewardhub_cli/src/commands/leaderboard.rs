//! The `leaderboard` subcommand: ranking queries for three periods.

use anyhow::Result;
use clap::{Args, Subcommand};
use rewardhub_api::Client;

use crate::output::{print_json, print_leaderboard_table, OutputFormat};

#[derive(Args)]
pub struct LeaderboardArgs {
    #[command(subcommand)]
    pub period: LeaderboardPeriod,
}

#[derive(Subcommand)]
pub enum LeaderboardPeriod {
    /// All-time ranking
    Overall,
    /// Today's ranking
    Today,
    /// Ranking for a given month
    Month {
        year: i32,
        /// Month number (1-12)
        month: u32,
    },
}

pub async fn run(args: &LeaderboardArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let entries = match &args.period {
        LeaderboardPeriod::Overall => client.leaderboard_overall().await?,
        LeaderboardPeriod::Today => client.leaderboard_today().await?,
        LeaderboardPeriod::Month { year, month } => {
            client.leaderboard_month(*year, *month).await?
        }
    };

    match format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Table => print_leaderboard_table(&entries),
    }
    Ok(())
}
