mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rewardhub_api::{Client, Session};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "rewardhub")]
#[command(about = "Query the RewardHub loyalty platform API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base API URL. Falls back to REWARDHUB_API_URL, then the production URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage delivery addresses
    Addresses(commands::addresses::AddressesArgs),
    /// Manage payout keys
    TransferMethods(commands::transfer_methods::TransferMethodsArgs),
    /// Commission balance, ledger, and withdrawals
    Commissions(commands::commissions::CommissionsArgs),
    /// List payments
    Payments(commands::payments::PaymentsArgs),
    /// List a company's points rules
    Points(commands::points::PointsArgs),
    /// Cashback programs and earned credits
    Cashback(commands::cashback::CashbackArgs),
    /// Search public categories
    Categories(commands::categories::CategoriesArgs),
    /// Points leaderboards
    Leaderboard(commands::leaderboard::LeaderboardArgs),
    /// Manage saved products
    Selections(commands::selections::SelectionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rewardhub_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    // --api-url overrides the environment; the token always comes from the env
    let client = match &cli.api_url {
        Some(api_url) => {
            let session = match std::env::var("REWARDHUB_API_TOKEN") {
                Ok(token) => Session::bearer(token),
                Err(_) => Session::anonymous(),
            };
            Client::new(api_url, session)?
        }
        None => Client::from_env()?,
    };

    match &cli.command {
        Commands::Addresses(args) => commands::addresses::run(args, &client, &format).await?,
        Commands::TransferMethods(args) => {
            commands::transfer_methods::run(args, &client, &format).await?
        }
        Commands::Commissions(args) => commands::commissions::run(args, &client, &format).await?,
        Commands::Payments(args) => commands::payments::run(args, &client, &format).await?,
        Commands::Points(args) => commands::points::run(args, &client, &format).await?,
        Commands::Cashback(args) => commands::cashback::run(args, &client, &format).await?,
        Commands::Categories(args) => commands::categories::run(args, &client, &format).await?,
        Commands::Leaderboard(args) => commands::leaderboard::run(args, &client, &format).await?,
        Commands::Selections(args) => commands::selections::run(args, &client, &format).await?,
    }

    Ok(())
}
